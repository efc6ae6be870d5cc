//! Offer types: a generated candidate trip between two cities.

use std::fmt;

use crate::geo::Coordinate;

use super::mode::TransportMode;
use super::time::ClockTime;

/// Identity of an offer within one generated batch.
///
/// Offers are numbered per category in slot order, rendered as `"bus-0"` or
/// `"carpool-2"`. Identifiers are unique within a batch but not stable
/// across batches: every regeneration starts the numbering over.
///
/// # Examples
///
/// ```
/// use route_server::domain::{OfferId, TransportMode};
///
/// let id = OfferId::new(TransportMode::Bus, 0);
/// assert_eq!(id.to_string(), "bus-0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OfferId {
    mode: TransportMode,
    index: usize,
}

impl OfferId {
    /// Create an offer identity from a category and its slot index.
    pub fn new(mode: TransportMode, index: usize) -> Self {
        Self { mode, index }
    }

    /// Returns the category of the identified offer.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Returns the category-scoped slot index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mode.as_str(), self.index)
    }
}

/// A generated candidate trip.
///
/// Everything except the distance and the endpoint coordinates is drawn
/// from randomized parameters; the distance is the Haversine great-circle
/// distance between the endpoint cities and is deterministic.
///
/// The category is immutable after construction: there is no mutator, and
/// the identity carries the same mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    /// Batch-scoped identity ("bus-0").
    pub id: OfferId,

    /// Transportation category.
    pub mode: TransportMode,

    /// Operator name, drawn from the category's fixed list.
    pub operator: &'static str,

    /// Origin city name.
    pub origin: String,

    /// Destination city name.
    pub destination: String,

    /// Departure time (one of the fixed daily slots).
    pub departure: ClockTime,

    /// Arrival time, derived from departure plus the trip duration.
    pub arrival: ClockTime,

    /// Trip duration in whole hours (no sub-hour granularity is modelled).
    pub duration_hours: u32,

    /// Price in whole euros.
    pub price: u32,

    /// Number of transfers. Always zero today; kept for future
    /// multi-leg support.
    pub transfers: u32,

    /// Great-circle distance between the endpoints in whole kilometres.
    pub distance_km: u32,

    /// Origin coordinate, copied from the city table.
    pub origin_coord: Coordinate,

    /// Destination coordinate, copied from the city table.
    pub destination_coord: Coordinate,
}

impl Offer {
    /// Returns the duration as displayed on offer cards, e.g. `"3h 0m"`.
    pub fn duration_label(&self) -> String {
        format!("{}h 0m", self.duration_hours)
    }

    /// Returns the distance as displayed on offer cards, e.g. `"878 km"`.
    pub fn distance_label(&self) -> String {
        format!("{} km", self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer() -> Offer {
        Offer {
            id: OfferId::new(TransportMode::Bus, 2),
            mode: TransportMode::Bus,
            operator: "FLIXBUS",
            origin: "Paris".to_string(),
            destination: "Berlin".to_string(),
            departure: ClockTime::parse("12:00 PM").unwrap(),
            arrival: ClockTime::parse("03:00 PM").unwrap(),
            duration_hours: 3,
            price: 50,
            transfers: 0,
            distance_km: 878,
            origin_coord: Coordinate::new(2.3522, 48.8566),
            destination_coord: Coordinate::new(13.4050, 52.5200),
        }
    }

    #[test]
    fn id_display() {
        assert_eq!(OfferId::new(TransportMode::Bus, 0).to_string(), "bus-0");
        assert_eq!(
            OfferId::new(TransportMode::Carpool, 2).to_string(),
            "carpool-2"
        );
    }

    #[test]
    fn id_accessors() {
        let id = OfferId::new(TransportMode::Carpool, 1);
        assert_eq!(id.mode(), TransportMode::Carpool);
        assert_eq!(id.index(), 1);
    }

    #[test]
    fn id_equality() {
        let a = OfferId::new(TransportMode::Bus, 0);
        let b = OfferId::new(TransportMode::Bus, 0);
        let c = OfferId::new(TransportMode::Carpool, 0);
        let d = OfferId::new(TransportMode::Bus, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn duration_label_has_zero_minutes() {
        let offer = sample_offer();
        assert_eq!(offer.duration_label(), "3h 0m");
    }

    #[test]
    fn distance_label() {
        let offer = sample_offer();
        assert_eq!(offer.distance_label(), "878 km");

        let zero = Offer {
            distance_km: 0,
            ..offer
        };
        assert_eq!(zero.distance_label(), "0 km");
    }
}
