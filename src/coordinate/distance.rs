//! Great-circle distance.

use super::types::GeoCoordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Assumes a spherical Earth of radius [`EARTH_RADIUS_METERS`].
///
/// # Example
///
/// ```
/// use geo_coordinate::{distance, GeoCoordinate};
///
/// let a = GeoCoordinate::new(-1.729_722_2, 53.320_555_5).unwrap();
/// let b = GeoCoordinate::new(-1.699_722_2, 53.318_611_1).unwrap();
/// assert!((distance(a, b) - 2_004.367_8).abs() < 1e-3);
/// ```
#[must_use]
pub fn distance(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lon1 = a.longitude().to_radians();
    let lat1 = a.latitude().to_radians();
    let lon2 = b.longitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let half_dlat = ((lat2 - lat1) / 2.0).sin();
    let half_dlon = ((lon2 - lon1) / 2.0).sin();
    let hav = lat1.cos().mul_add(lat2.cos() * half_dlon * half_dlon, half_dlat * half_dlat);

    // Rounding can push antipodal pairs a hair past 1.
    EARTH_RADIUS_METERS * 2.0 * hav.sqrt().min(1.0).asin()
}

impl GeoCoordinate {
    /// Haversine distance to `other`, in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(*self, *other)
    }
}
