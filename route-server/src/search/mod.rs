//! Route search pipeline.
//!
//! Given an origin, a destination, and the city table, the pipeline
//! synthesizes a batch of candidate offers and keeps a category-filtered
//! view of it with a highlighted offer for the map.

mod generate;
mod results;

pub use generate::OfferGenerator;
pub use results::{ResultsEvent, ResultsState};
