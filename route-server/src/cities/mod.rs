//! City coordinate lookup.
//!
//! A fixed name → coordinate table, built once at startup, is the sole
//! source of truth for which cities are valid search endpoints. Lookup
//! misses are not errors: an unknown city simply means no offers can be
//! generated for it.

use std::collections::HashMap;

use crate::geo::Coordinate;

/// The built-in city table: (name, longitude, latitude).
const EUROPEAN_CITIES: &[(&str, f64, f64)] = &[
    ("Paris", 2.3522, 48.8566),
    ("London", -0.1276, 51.5074),
    ("Berlin", 13.4050, 52.5200),
    ("Rome", 12.4964, 41.9028),
    ("Madrid", -3.7038, 40.4168),
    ("Amsterdam", 4.9041, 52.3676),
    ("Brussels", 4.3517, 50.8503),
    ("Vienna", 16.3738, 48.2082),
    ("Prague", 14.4378, 50.0755),
    ("Barcelona", 2.1734, 41.3851),
    ("Milan", 9.1900, 45.4642),
    ("Munich", 11.5820, 48.1351),
    ("Copenhagen", 12.5683, 55.6761),
    ("Stockholm", 18.0686, 59.3293),
    ("Oslo", 10.7522, 59.9139),
];

/// Immutable city → coordinate table.
///
/// Constructed once at process start and shared by reference; there is no
/// runtime mutation.
///
/// # Examples
///
/// ```
/// use route_server::cities::CityIndex;
///
/// let cities = CityIndex::european();
/// assert!(cities.lookup("Paris").is_some());
/// assert!(cities.lookup("Atlantis").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CityIndex {
    coords: HashMap<&'static str, Coordinate>,
}

impl CityIndex {
    /// Create the built-in index of European cities served by the app.
    pub fn european() -> Self {
        let coords = EUROPEAN_CITIES
            .iter()
            .map(|&(name, lon, lat)| (name, Coordinate::new(lon, lat)))
            .collect();
        Self { coords }
    }

    /// Look up a city's coordinate by exact name.
    ///
    /// Total over the table: unknown names return `None` rather than an
    /// error, and callers treat absence as "cannot generate offers for
    /// this city".
    pub fn lookup(&self, name: &str) -> Option<Coordinate> {
        self.coords.get(name).copied()
    }

    /// Check whether a city is a valid search endpoint.
    pub fn contains(&self, name: &str) -> bool {
        self.coords.contains_key(name)
    }

    /// Search city names by case-insensitive substring match.
    ///
    /// Results are sorted alphabetically and capped at `limit`. Backs the
    /// search form's autocomplete.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&'static str> {
        let needle = query.to_lowercase();
        let mut matches: Vec<&'static str> = self
            .coords
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .copied()
            .collect();
        matches.sort_unstable();
        matches.truncate(limit);
        matches
    }

    /// All known city names, sorted alphabetically.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.coords.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of known cities.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
