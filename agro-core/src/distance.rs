//! Great-circle distances between WGS84 coordinates.
//!
//! Coordinates use `geo::Coord<f64>` with `x = longitude` and
//! `y = latitude`, matching the rest of the crate.

use geo::Coord;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use agro_core::lat_lng;
///
/// let ottawa = lat_lng(45.4215, -75.6972);
/// assert_eq!(ottawa.y, 45.4215);
/// assert_eq!(ottawa.x, -75.6972);
/// ```
#[must_use]
pub const fn lat_lng(lat: f64, lng: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

/// Report whether a coordinate is finite and inside the WGS84 ranges.
#[must_use]
pub fn is_valid_coordinate(coord: Coord<f64>) -> bool {
    coord.x.is_finite()
        && coord.y.is_finite()
        && (-90.0..=90.0).contains(&coord.y)
        && (-180.0..=180.0).contains(&coord.x)
}

/// Haversine distance in kilometres between two coordinates.
///
/// Both coordinates must be finite and in range; this is not checked.
/// The result is symmetric and zero for identical inputs.
///
/// # Examples
/// ```
/// use agro_core::{distance_km, lat_lng};
///
/// let ottawa = lat_lng(45.4215, -75.6972);
/// assert_eq!(distance_km(ottawa, ottawa), 0.0);
///
/// let montreal = lat_lng(45.5017, -73.5673);
/// let km = distance_km(ottawa, montreal);
/// assert!((km - 166.0).abs() < 2.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `h` marginally past 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}
