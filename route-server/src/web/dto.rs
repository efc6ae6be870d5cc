//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Offer;
use crate::search::ResultsState;

/// Request to search for routes between two cities.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Origin city name
    pub from: String,

    /// Destination city name
    pub to: String,

    /// Travel date in ISO format (YYYY-MM-DD); validated but not used
    /// by generation
    pub date: Option<String>,

    /// Category filter: "all", "bus", or "carpool" (defaults to "all")
    pub mode: Option<String>,
}

/// An offer in search results.
#[derive(Debug, Serialize)]
pub struct OfferResult {
    /// Batch-scoped offer id ("bus-0")
    pub id: String,

    /// Operator name
    pub operator: String,

    /// Transportation mode ("bus" or "carpool")
    pub mode: String,

    /// Origin city name
    pub from: String,

    /// Destination city name
    pub to: String,

    /// Departure time ("06:00 AM")
    pub departure_time: String,

    /// Arrival time
    pub arrival_time: String,

    /// Duration label ("3h 0m")
    pub duration: String,

    /// Distance label ("878 km")
    pub distance: String,

    /// Price in whole euros
    pub price: u32,

    /// Number of transfers (always 0 today)
    pub transfers: u32,

    /// Endpoint coordinates for the map
    pub coordinates: CoordinatePair,
}

/// Origin and destination coordinates as `[lon, lat]` pairs.
#[derive(Debug, Serialize)]
pub struct CoordinatePair {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

impl OfferResult {
    /// Build a result from a domain offer.
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            id: offer.id.to_string(),
            operator: offer.operator.to_string(),
            mode: offer.mode.as_str().to_string(),
            from: offer.origin.clone(),
            to: offer.destination.clone(),
            departure_time: offer.departure.to_string(),
            arrival_time: offer.arrival.to_string(),
            duration: offer.duration_label(),
            distance: offer.distance_label(),
            price: offer.price,
            transfers: offer.transfers,
            coordinates: CoordinatePair {
                from: [offer.origin_coord.lon, offer.origin_coord.lat],
                to: [offer.destination_coord.lon, offer.destination_coord.lat],
            },
        }
    }
}

/// Per-category offer counts for the filter tabs.
#[derive(Debug, Serialize)]
pub struct ModeCounts {
    pub all: usize,
    pub bus: usize,
    pub carpool: usize,
}

/// Response for route search: the post-transition snapshot of the
/// results state.
#[derive(Debug, Serialize)]
pub struct SearchRoutesResponse {
    /// Offers in the filtered view, slot order within each category
    pub offers: Vec<OfferResult>,

    /// The highlighted offer (first of the filtered view), if any
    pub highlighted: Option<OfferResult>,

    /// The active filter this snapshot was taken under
    pub filter: String,

    /// Batch counts per category
    pub counts: ModeCounts,
}

impl SearchRoutesResponse {
    /// Snapshot a results state after its transitions have been applied.
    pub fn from_state(state: &ResultsState) -> Self {
        use crate::domain::{ModeFilter, TransportMode};

        Self {
            offers: state.filtered().iter().map(OfferResult::from_offer).collect(),
            highlighted: state.highlighted().map(OfferResult::from_offer),
            filter: state.filter().to_string(),
            counts: ModeCounts {
                all: state.count_for(ModeFilter::All),
                bus: state.count_for(ModeFilter::Only(TransportMode::Bus)),
                carpool: state.count_for(ModeFilter::Only(TransportMode::Carpool)),
            },
        }
    }
}

/// Request to search cities by name.
#[derive(Debug, Deserialize)]
pub struct CitySearchRequest {
    /// Query string (case-insensitive substring)
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A city in search results.
#[derive(Debug, Serialize)]
pub struct CityResult {
    /// City name
    pub name: String,

    /// `[lon, lat]` coordinate pair
    pub coordinates: [f64; 2],
}

/// Response for city search.
#[derive(Debug, Serialize)]
pub struct CitySearchResponse {
    /// Matching cities
    pub cities: Vec<CityResult>,
}

/// Error payload returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
