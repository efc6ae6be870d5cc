//! Application state for the web layer.

use std::sync::Arc;

use crate::cities::CityIndex;

/// Shared application state.
///
/// The city table is immutable after startup, so sharing it by `Arc` is
/// the only coordination the handlers need.
#[derive(Clone)]
pub struct AppState {
    /// City → coordinate table.
    pub cities: Arc<CityIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(cities: CityIndex) -> Self {
        Self {
            cities: Arc::new(cities),
        }
    }
}
