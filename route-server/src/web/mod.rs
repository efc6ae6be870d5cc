//! Web layer for the route search server.
//!
//! Provides HTTP endpoints for searching cities and routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
