//! Bit-interleaved integer hash.
//!
//! A coordinate is hashed by bisecting the longitude range `[-180, 180]` and
//! the latitude range `[-90, 90]` thirty times each. Every bisection yields
//! one bit: 1 when the value lies strictly above the midpoint, 0 otherwise.
//! Bits are interleaved longitude first, most significant pair first, into a
//! 60-bit value held in an `i64` whose top four bits are always zero.
//!
//! | Bits | Cell width (lon) | Cell height (lat) |
//! |------|------------------|-------------------|
//! | 20   | ~0.35°           | ~0.18°            |
//! | 40   | ~0.00034°        | ~0.00017°         |
//! | 52   | ~5.4e-6°         | ~2.7e-6°          |
//! | 60   | ~3.4e-7°         | ~1.7e-7°          |

use super::error::{GeoError, Result};
use super::types::{GeoCoordinate, EAST, NORTH, SOUTH, WEST};

/// Number of significant bits in a full hash.
pub const BASE_PRECISION: i32 = 60;

/// Bit precision used when none is given.
pub const DEFAULT_HASH_PRECISION: i32 = 52;

/// One bisection step: returns the decision bit and narrows the range.
fn bisect(value: f64, min: &mut f64, max: &mut f64) -> i64 {
    let mid = (*min + *max) / 2.0;
    if value > mid {
        *min = mid;
        1
    } else {
        *max = mid;
        0
    }
}

/// Narrows the range according to an already known bit.
fn narrow(bit: i64, min: &mut f64, max: &mut f64) {
    let mid = (*min + *max) / 2.0;
    if bit == 1 {
        *min = mid;
    } else {
        *max = mid;
    }
}

fn validate_precision(precision: i32) -> Result<()> {
    if precision < 0 || precision > BASE_PRECISION {
        return Err(GeoError::PrecisionOutOfRange(precision));
    }
    Ok(())
}

/// Computes the full 60-bit hash of a longitude/latitude pair.
///
/// Inputs are not validated; use [`GeoCoordinate::full_hash`] for a checked
/// coordinate.
///
/// # Example
///
/// ```
/// use geo_coordinate::hash::encode;
///
/// assert_eq!(encode(106.709_437, -6.329_094) >> 8, 3_195_111_357_704_980);
/// ```
#[must_use]
pub fn encode(longitude: f64, latitude: f64) -> i64 {
    let (mut west, mut east) = (WEST, EAST);
    let (mut south, mut north) = (SOUTH, NORTH);
    let mut hash = 0_i64;
    let mut bit = BASE_PRECISION;

    while bit > 0 {
        bit -= 1;
        hash |= bisect(longitude, &mut west, &mut east) << bit;
        bit -= 1;
        hash |= bisect(latitude, &mut south, &mut north) << bit;
    }

    hash
}

/// Decodes the top `precision` bits of `hash` back to a cell center.
///
/// `hash` holds `precision` significant bits in its low end, i.e. the value
/// returned by [`GeoCoordinate::get_hash`] with the same precision. Bits are
/// consumed from `precision - 1` down to 0, alternating longitude and
/// latitude starting with longitude. With an odd precision the final
/// longitude step has no latitude partner.
///
/// # Errors
///
/// Returns [`GeoError::PrecisionOutOfRange`] if `precision` is not in `[0, 60]`.
pub fn decode(hash: i64, precision: i32) -> Result<GeoCoordinate> {
    validate_precision(precision)?;
    Ok(decode_unchecked(hash, precision))
}

fn decode_unchecked(hash: i64, precision: i32) -> GeoCoordinate {
    let (mut west, mut east) = (WEST, EAST);
    let (mut south, mut north) = (SOUTH, NORTH);
    let mut is_longitude = true;

    for bit in (0..precision).rev() {
        let value = (hash >> bit) & 1;
        if is_longitude {
            narrow(value, &mut west, &mut east);
        } else {
            narrow(value, &mut south, &mut north);
        }
        is_longitude = !is_longitude;
    }

    GeoCoordinate::trusted((west + east) / 2.0, (south + north) / 2.0)
}

impl GeoCoordinate {
    /// Full 60-bit hash of this coordinate.
    #[must_use]
    pub fn full_hash(&self) -> i64 {
        encode(self.longitude(), self.latitude())
    }

    /// Hash truncated to its top `precision` bits.
    ///
    /// Returns `full_hash >> (60 - precision)`, discarding the finest
    /// bisection decisions.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::PrecisionOutOfRange`] if `precision` is not in `[0, 60]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_coordinate::GeoCoordinate;
    ///
    /// let coord = GeoCoordinate::new(106.800_254, 0.177_515).unwrap();
    /// assert_eq!(coord.get_hash(52).unwrap(), 3_950_182_899_565_084);
    /// assert_eq!(coord.get_hash(0).unwrap(), 0);
    /// assert!(coord.get_hash(61).is_err());
    /// ```
    pub fn get_hash(&self, precision: i32) -> Result<i64> {
        validate_precision(precision)?;
        Ok(self.full_hash() >> (BASE_PRECISION - precision))
    }

    /// Hash at [`DEFAULT_HASH_PRECISION`] bits.
    #[must_use]
    pub fn hash(&self) -> i64 {
        self.full_hash() >> (BASE_PRECISION - DEFAULT_HASH_PRECISION)
    }

    /// Reconstructs the cell center for a hash of the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::PrecisionOutOfRange`] if `precision` is not in `[0, 60]`.
    pub fn from_hash(hash: i64, precision: i32) -> Result<Self> {
        decode(hash, precision)
    }

    /// Reconstructs the cell center for a [`DEFAULT_HASH_PRECISION`]-bit hash.
    #[must_use]
    pub fn from_hash_default(hash: i64) -> Self {
        decode_unchecked(hash, DEFAULT_HASH_PRECISION)
    }
}

/// A coordinate paired with its precomputed 60-bit hash.
///
/// The hash is computed once at construction, so repeated hash and geohash
/// requests do not repeat the bisection. The plain [`GeoCoordinate`] stays a
/// bare value.
///
/// # Example
///
/// ```
/// use geo_coordinate::{GeoCoordinate, HashedCoordinate};
///
/// let coord = GeoCoordinate::new(106.709_437, -6.329_094).unwrap();
/// let hashed = HashedCoordinate::new(coord);
/// assert_eq!(hashed.hash(), coord.hash());
/// assert_eq!(hashed.to_geohash_with_length(11).unwrap(), "qqggupz6q57");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashedCoordinate {
    coordinate: GeoCoordinate,
    full_hash: i64,
}

impl HashedCoordinate {
    /// Wraps a coordinate, computing its hash.
    #[must_use]
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self {
            coordinate,
            full_hash: coordinate.full_hash(),
        }
    }

    /// The wrapped coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Full 60-bit hash.
    #[must_use]
    pub const fn full_hash(&self) -> i64 {
        self.full_hash
    }

    /// Hash truncated to its top `precision` bits.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::PrecisionOutOfRange`] if `precision` is not in `[0, 60]`.
    pub fn get_hash(&self, precision: i32) -> Result<i64> {
        validate_precision(precision)?;
        Ok(self.full_hash >> (BASE_PRECISION - precision))
    }

    /// Hash at [`DEFAULT_HASH_PRECISION`] bits.
    #[must_use]
    pub const fn hash(&self) -> i64 {
        self.full_hash >> (BASE_PRECISION - DEFAULT_HASH_PRECISION)
    }
}

impl From<GeoCoordinate> for HashedCoordinate {
    fn from(coordinate: GeoCoordinate) -> Self {
        Self::new(coordinate)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    const TOLERANCE: f64 = 1e-5;

    const REFERENCE: [(f64, f64, i64); 3] = [
        (106.709_437, -6.329_094, 3_195_111_357_704_980),
        (106.710_205, -6.330_120, 3_195_111_357_524_970),
        (106.800_254, 0.177_515, 3_950_182_899_565_084),
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn default_hash_matches_reference() {
        for (lon, lat, expected) in REFERENCE {
            let coord = GeoCoordinate::new(lon, lat).unwrap();
            assert_eq!(coord.hash(), expected, "({lon}, {lat})");
            assert_eq!(coord.get_hash(52).unwrap(), expected);
        }
    }

    #[test]
    fn full_hash_fits_in_sixty_bits() {
        for (lon, lat, expected) in REFERENCE {
            let full = encode(lon, lat);
            assert_eq!(full >> 60, 0);
            assert_eq!(full >> 8, expected);
        }
        assert_eq!(encode(180.0, 90.0), (1_i64 << 60) - 1);
        assert_eq!(encode(-180.0, -90.0), 0);
    }

    #[test]
    fn midpoint_ties_resolve_to_zero() {
        // 0 equals the first midpoint of both ranges.
        let hash = encode(0.0, 0.0);
        assert_eq!(hash >> 58, 0b00);
        // Every later step sees a value above the midpoint.
        assert_eq!(hash, (1_i64 << 58) - 1);
    }

    #[test]
    fn get_hash_precision_bounds() {
        let coord = GeoCoordinate::new(10.0, 10.0).unwrap();
        assert_eq!(coord.get_hash(60).unwrap(), coord.full_hash());
        assert_eq!(coord.get_hash(0).unwrap(), 0);
        assert_eq!(coord.get_hash(-1), Err(GeoError::PrecisionOutOfRange(-1)));
        assert_eq!(coord.get_hash(61), Err(GeoError::PrecisionOutOfRange(61)));
    }

    #[test]
    fn get_hash_discards_low_bits() {
        let coord = GeoCoordinate::new(-73.985_656, 40.748_433).unwrap();
        let full = coord.full_hash();
        for precision in 0..=60 {
            assert_eq!(
                coord.get_hash(precision).unwrap(),
                full >> (60 - precision)
            );
        }
    }

    #[test]
    fn decode_reference_hashes_at_default_precision() {
        for (lon, lat, hash) in REFERENCE {
            let coord = GeoCoordinate::from_hash(hash, 52).unwrap();
            assert!(close(coord.longitude(), lon), "{coord}");
            assert!(close(coord.latitude(), lat), "{coord}");
            assert_eq!(GeoCoordinate::from_hash_default(hash), coord);
        }
    }

    #[test]
    fn decode_full_hash_round_trips() {
        for (lon, lat, _) in REFERENCE {
            let coord = decode(encode(lon, lat), 60).unwrap();
            assert!(close(coord.longitude(), lon));
            assert!(close(coord.latitude(), lat));
        }
    }

    #[test]
    fn decode_coarse_precisions() {
        assert_eq!(decode(0, 0).unwrap().into_parts(), (0.0, 0.0));
        // Single longitude bit: eastern half.
        assert_eq!(decode(1, 1).unwrap().into_parts(), (90.0, 0.0));
        // Eastern half, northern half.
        assert_eq!(decode(0b11, 2).unwrap().into_parts(), (90.0, 45.0));
        // Western half, northern half.
        assert_eq!(decode(0b01, 2).unwrap().into_parts(), (-90.0, 45.0));
    }

    #[test]
    fn decode_rejects_out_of_range_precision() {
        assert_eq!(decode(0, -1), Err(GeoError::PrecisionOutOfRange(-1)));
        assert_eq!(decode(0, 61), Err(GeoError::PrecisionOutOfRange(61)));
    }

    #[test]
    fn decode_extremes_stay_in_range() {
        let max = decode((1_i64 << 60) - 1, 60).unwrap();
        assert!(max.longitude() < 180.0 && max.latitude() < 90.0);
        let min = decode(0, 60).unwrap();
        assert!(min.longitude() > -180.0 && min.latitude() > -90.0);
        assert!(GeoCoordinate::new(max.longitude(), max.latitude()).is_ok());
    }

    #[test]
    fn hashed_coordinate_matches_plain() {
        let coord = GeoCoordinate::new(-1.729_722_2, 53.320_555_5).unwrap();
        let hashed = HashedCoordinate::from(coord);
        assert_eq!(hashed.coordinate(), coord);
        assert_eq!(hashed.full_hash(), coord.full_hash());
        assert_eq!(hashed.hash(), coord.hash());
        assert_eq!(hashed.get_hash(20), coord.get_hash(20));
        assert!(hashed.get_hash(61).is_err());
    }
}
