//! Offer generation.
//!
//! There is no real schedule backend: each search synthesizes a fixed-size
//! batch of offers from randomized parameters. Only the trip distance and
//! the endpoint coordinates are deterministic; prices, durations, and
//! operators differ on every regeneration. Callers that need reproducible
//! batches inject a seeded RNG.

use rand::Rng;

use crate::cities::CityIndex;
use crate::domain::{ClockTime, Meridiem, Offer, OfferId, TransportMode};
use crate::geo::{Coordinate, distance_km};

/// The fixed daily departure slots.
const DEPARTURE_SLOTS: [ClockTime; 5] = [
    ClockTime::new(6, 0, Meridiem::Am),
    ClockTime::new(9, 0, Meridiem::Am),
    ClockTime::new(12, 0, Meridiem::Pm),
    ClockTime::new(3, 0, Meridiem::Pm),
    ClockTime::new(6, 0, Meridiem::Pm),
];

/// Carpool offers run on the first slots only.
const CARPOOL_SLOT_COUNT: usize = 3;

/// Bus operators, drawn uniformly per offer.
const BUS_OPERATORS: &[&str] = &["FLIXBUS", "EUROLINES", "ALSA"];

/// Carpool operators, drawn uniformly per offer.
const CARPOOL_OPERATORS: &[&str] = &["BLABLACAR", "CARPOOL24", "RIDESHARE"];

/// Synthesizes offer batches for a pair of cities.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use route_server::cities::CityIndex;
/// use route_server::search::OfferGenerator;
///
/// let cities = CityIndex::european();
/// let generator = OfferGenerator::new(&cities);
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// let offers = generator.generate("Paris", "Berlin", &mut rng);
/// assert_eq!(offers.len(), 8);
///
/// // Unknown cities degrade silently to an empty batch
/// assert!(generator.generate("Atlantis", "Berlin", &mut rng).is_empty());
/// ```
pub struct OfferGenerator<'a> {
    cities: &'a CityIndex,
}

impl<'a> OfferGenerator<'a> {
    /// Create a generator backed by the given city table.
    pub fn new(cities: &'a CityIndex) -> Self {
        Self { cities }
    }

    /// Generate a full offer batch for an origin/destination pair.
    ///
    /// Returns 5 bus offers (one per departure slot) followed by 3 carpool
    /// offers (first three slots), or an empty batch when either city is
    /// not in the table. Generation proceeds when origin and destination
    /// are the same city (the distance is 0 km); rejecting identical
    /// endpoints is the caller's job.
    pub fn generate(&self, origin: &str, destination: &str, rng: &mut impl Rng) -> Vec<Offer> {
        let (Some(origin_coord), Some(destination_coord)) =
            (self.cities.lookup(origin), self.cities.lookup(destination))
        else {
            return Vec::new();
        };

        let distance = distance_km(origin_coord, destination_coord);
        let mut offers = Vec::with_capacity(DEPARTURE_SLOTS.len() + CARPOOL_SLOT_COUNT);

        for (index, slot) in DEPARTURE_SLOTS.iter().enumerate() {
            offers.push(build_offer(
                TransportMode::Bus,
                index,
                *slot,
                origin,
                destination,
                origin_coord,
                destination_coord,
                distance,
                rng,
            ));
        }

        for (index, slot) in DEPARTURE_SLOTS.iter().take(CARPOOL_SLOT_COUNT).enumerate() {
            offers.push(build_offer(
                TransportMode::Carpool,
                index,
                *slot,
                origin,
                destination,
                origin_coord,
                destination_coord,
                distance,
                rng,
            ));
        }

        offers
    }
}

/// Build a single offer for one departure slot.
#[allow(clippy::too_many_arguments)]
fn build_offer(
    mode: TransportMode,
    index: usize,
    departure: ClockTime,
    origin: &str,
    destination: &str,
    origin_coord: Coordinate,
    destination_coord: Coordinate,
    distance: u32,
    rng: &mut impl Rng,
) -> Offer {
    // Per-category randomization parameters: duration range, operator
    // list, base price range, and the per-slot price increment.
    let (duration_hours, operators, base_price, price_step) = match mode {
        TransportMode::Bus => (rng.gen_range(2..=5u32), BUS_OPERATORS, rng.gen_range(30..60u32), 5),
        TransportMode::Carpool => {
            (rng.gen_range(3..=5u32), CARPOOL_OPERATORS, rng.gen_range(20..40u32), 3)
        }
    };
    let operator = operators[rng.gen_range(0..operators.len())];

    Offer {
        id: OfferId::new(mode, index),
        mode,
        operator,
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure,
        arrival: departure.plus_hours(duration_hours),
        duration_hours,
        price: base_price + price_step * index as u32,
        transfers: 0,
        distance_km: distance,
        origin_coord,
        destination_coord,
    }
}
