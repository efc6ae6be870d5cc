//! Geographic coordinates and great-circle distance.
//!
//! Offers advertise the straight-line trip distance between their endpoint
//! cities. Distances are computed with the Haversine formula on a sphere of
//! radius 6371 km and rounded to whole kilometres for display.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in decimal degrees.
///
/// Longitude comes first to match the `[lon, lat]` pair ordering used by
/// the map layer.
///
/// # Examples
///
/// ```
/// use route_server::geo::Coordinate;
///
/// let paris = Coordinate::new(2.3522, 48.8566);
/// assert_eq!(paris.lon, 2.3522);
/// assert_eq!(paris.lat, 48.8566);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees (east positive).
    pub lon: f64,

    /// Latitude in decimal degrees (north positive).
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude in decimal degrees.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Haversine formula on a sphere of radius 6371 km. Symmetric in its
/// arguments and zero when both points coincide.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance rounded to the nearest whole kilometre.
///
/// This is the figure shown on offer cards ("878 km").
///
/// # Examples
///
/// ```
/// use route_server::geo::{Coordinate, distance_km};
///
/// let paris = Coordinate::new(2.3522, 48.8566);
/// assert_eq!(distance_km(paris, paris), 0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> u32 {
    haversine_km(a, b).round() as u32
}
