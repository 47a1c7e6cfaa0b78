//! Coordinate value type.

use std::fmt;

use super::error::{GeoError, Result};

/// Western bound of longitude, in degrees.
pub const WEST: f64 = -180.0;
/// Eastern bound of longitude, in degrees.
pub const EAST: f64 = 180.0;
/// Southern bound of latitude, in degrees.
pub const SOUTH: f64 = -90.0;
/// Northern bound of latitude, in degrees.
pub const NORTH: f64 = 90.0;

/// A validated (longitude, latitude) pair.
///
/// Both bounds are inclusive: longitude lies in `[-180, 180]` and latitude in
/// `[-90, 90]`. Values are immutable once constructed and compare by value.
///
/// # Example
///
/// ```
/// use geo_coordinate::GeoCoordinate;
///
/// let coord = GeoCoordinate::new(106.709_437, -6.329_094).unwrap();
/// let (lon, lat) = coord.into_parts();
/// assert_eq!(lon, 106.709_437);
/// assert_eq!(lat, -6.329_094);
/// assert_eq!(coord.to_string(), "(106.7094370, -6.3290940)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    longitude: f64,
    latitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from longitude and latitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::LongitudeOutOfRange`] or
    /// [`GeoError::LatitudeOutOfRange`] when a component is outside its
    /// domain. NaN is never in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_coordinate::{GeoCoordinate, GeoError};
    ///
    /// assert!(GeoCoordinate::new(180.0, -90.0).is_ok());
    /// assert_eq!(
    ///     GeoCoordinate::new(180.000_000_1, 0.0),
    ///     Err(GeoError::LongitudeOutOfRange(180.000_000_1)),
    /// );
    /// ```
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !(WEST..=EAST).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        if !(SOUTH..=NORTH).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Builds a coordinate without range checks.
    ///
    /// Only the hash decoder uses this: bisection midpoints never leave the
    /// initial bounds.
    pub(crate) const fn trusted(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Decomposes into `(longitude, latitude)`.
    #[must_use]
    pub const fn into_parts(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.longitude, self.latitude)
    }
}

impl From<GeoCoordinate> for (f64, f64) {
    fn from(coord: GeoCoordinate) -> Self {
        coord.into_parts()
    }
}

impl TryFrom<(f64, f64)> for GeoCoordinate {
    type Error = GeoError;

    fn try_from((longitude, latitude): (f64, f64)) -> Result<Self> {
        Self::new(longitude, latitude)
    }
}
