//! Domain types for the route search pipeline.
//!
//! This module contains the core domain model types that represent
//! validated offer data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod mode;
mod offer;
mod time;

pub use mode::{InvalidMode, ModeFilter, TransportMode};
pub use offer::{Offer, OfferId};
pub use time::{ClockTime, Meridiem, TimeError};
