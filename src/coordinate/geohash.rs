//! Base-32 geohash text codec.
//!
//! Each geohash character carries five bits of the 60-bit interleaved hash,
//! most significant group first, so a 12-character geohash holds the full
//! hash and shorter strings name progressively larger cells.
//!
//! # Geohash Precision Table
//!
//! | Length | Cell Width | Cell Height |
//! |--------|------------|-------------|
//! | 5      | ~4.9 km    | ~4.9 km     |
//! | 7      | ~153 m     | ~153 m      |
//! | 9      | ~4.8 m     | ~4.8 m      |
//! | 11     | ~15 cm     | ~15 cm      |
//! | 12     | ~3.7 cm    | ~1.9 cm     |

use std::str::FromStr;

use super::error::{GeoError, Result};
use super::hash::{decode, HashedCoordinate, BASE_PRECISION};
use super::types::GeoCoordinate;

/// The geohash alphabet; a character's index is its 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest geohash that fits in a 60-bit hash.
pub const MAX_GEOHASH_LENGTH: usize = 12;

/// Geohash length used when none is given.
pub const DEFAULT_GEOHASH_LENGTH: usize = 11;

const BITS_PER_CHAR: i32 = 5;
const CHAR_MASK: i64 = 0x1F;
const INVALID: u8 = u8::MAX;

/// ASCII byte → alphabet index, [`INVALID`] for bytes outside the alphabet.
const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

fn validate_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_GEOHASH_LENGTH {
        return Err(GeoError::GeohashLengthOutOfRange(length));
    }
    Ok(())
}

fn index_of(c: char) -> Option<i64> {
    let code = u32::from(c);
    if code >= 128 {
        return None;
    }
    match DECODE_TABLE[code as usize] {
        INVALID => None,
        index => Some(i64::from(index)),
    }
}

/// Fills `out` with the leading `out.len()` geohash characters of `full_hash`.
///
/// Callers guarantee `out.len() <= 12`, which keeps every shift non-negative.
fn fill(full_hash: i64, out: &mut [u8]) {
    let mut shift = BASE_PRECISION - BITS_PER_CHAR;
    for slot in out.iter_mut() {
        debug_assert!(shift >= 0);
        let index = (full_hash >> shift) & CHAR_MASK;
        *slot = ALPHABET[index as usize];
        shift -= BITS_PER_CHAR;
    }
}

/// Renders the leading `length` characters of a 60-bit hash.
///
/// # Errors
///
/// Returns [`GeoError::GeohashLengthOutOfRange`] if `length` is not in `[1, 12]`.
///
/// # Example
///
/// ```
/// use geo_coordinate::{geohash, hash};
///
/// let full = hash::encode(106.710_205, -6.330_120);
/// assert_eq!(geohash::encode(full, 11).unwrap(), "qqggupxurup");
/// ```
pub fn encode(full_hash: i64, length: usize) -> Result<String> {
    validate_length(length)?;
    Ok(render(full_hash, length))
}

fn render(full_hash: i64, length: usize) -> String {
    let mut buf = [0_u8; MAX_GEOHASH_LENGTH];
    fill(full_hash, &mut buf[..length]);
    buf[..length].iter().map(|&b| char::from(b)).collect()
}

/// Accumulates a geohash string into a 60-bit hash.
///
/// Bits below the last character are zero.
///
/// # Errors
///
/// - [`GeoError::InvalidGeohash`] if the string is empty or contains a
///   character outside [`ALPHABET`].
/// - [`GeoError::GeohashLengthOutOfRange`] if it is longer than 12 characters.
pub fn decode_hash(geohash: &str) -> Result<i64> {
    if geohash.is_empty() {
        log::debug!("Rejected empty geohash");
        return Err(GeoError::InvalidGeohash(
            "geohash contains 0 characters".to_string(),
        ));
    }

    let length = geohash.chars().count();
    if length > MAX_GEOHASH_LENGTH {
        log::debug!("Rejected geohash of length {length}");
        return Err(GeoError::GeohashLengthOutOfRange(length));
    }

    let mut full_hash = 0_i64;
    let mut shift = BASE_PRECISION - BITS_PER_CHAR;
    for (position, c) in geohash.chars().enumerate() {
        let Some(index) = index_of(c) else {
            log::debug!("Rejected geohash {geohash:?}: bad character {c:?}");
            return Err(GeoError::InvalidGeohash(format!(
                "character {c:?} at index {position}"
            )));
        };
        full_hash += index << shift;
        shift -= BITS_PER_CHAR;
    }

    Ok(full_hash)
}

impl GeoCoordinate {
    /// Geohash of [`DEFAULT_GEOHASH_LENGTH`] characters.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_coordinate::GeoCoordinate;
    ///
    /// let coord = GeoCoordinate::new(106.800_254, 0.177_515).unwrap();
    /// assert_eq!(coord.to_geohash(), "w25cn23d471");
    /// ```
    #[must_use]
    pub fn to_geohash(&self) -> String {
        render(self.full_hash(), DEFAULT_GEOHASH_LENGTH)
    }

    /// Geohash of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::GeohashLengthOutOfRange`] if `length` is not in `[1, 12]`.
    pub fn to_geohash_with_length(&self, length: usize) -> Result<String> {
        encode(self.full_hash(), length)
    }

    /// Writes a `length`-character geohash into `out` and returns the number
    /// of bytes written.
    ///
    /// # Errors
    ///
    /// - [`GeoError::GeohashLengthOutOfRange`] if `length` is not in `[1, 12]`.
    /// - [`GeoError::BufferTooSmall`] if `out` is shorter than `length`.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_coordinate::GeoCoordinate;
    ///
    /// let coord = GeoCoordinate::new(106.709_437, -6.329_094).unwrap();
    /// let mut buf = [0_u8; 16];
    /// let written = coord.write_geohash(&mut buf, 7).unwrap();
    /// assert_eq!(&buf[..written], b"qqggupz");
    /// ```
    pub fn write_geohash(&self, out: &mut [u8], length: usize) -> Result<usize> {
        write_into(self.full_hash(), out, length)
    }

    /// Decodes a geohash to the center of its finest (60-bit) cell.
    ///
    /// # Errors
    ///
    /// See [`decode_hash`].
    ///
    /// # Example
    ///
    /// ```
    /// use geo_coordinate::GeoCoordinate;
    ///
    /// let coord = GeoCoordinate::from_geohash("qqggupz6q57").unwrap();
    /// assert!((coord.longitude() - 106.709_437).abs() < 1e-5);
    /// assert!((coord.latitude() - -6.329_094).abs() < 1e-5);
    ///
    /// assert!(GeoCoordinate::from_geohash("").is_err());
    /// assert!(GeoCoordinate::from_geohash("abcdef").is_err());
    /// ```
    pub fn from_geohash(geohash: &str) -> Result<Self> {
        decode(decode_hash(geohash)?, BASE_PRECISION)
    }
}

impl HashedCoordinate {
    /// Geohash of [`DEFAULT_GEOHASH_LENGTH`] characters.
    #[must_use]
    pub fn to_geohash(&self) -> String {
        render(self.full_hash(), DEFAULT_GEOHASH_LENGTH)
    }

    /// Geohash of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::GeohashLengthOutOfRange`] if `length` is not in `[1, 12]`.
    pub fn to_geohash_with_length(&self, length: usize) -> Result<String> {
        encode(self.full_hash(), length)
    }

    /// Writes a `length`-character geohash into `out`.
    ///
    /// # Errors
    ///
    /// Same as [`GeoCoordinate::write_geohash`].
    pub fn write_geohash(&self, out: &mut [u8], length: usize) -> Result<usize> {
        write_into(self.full_hash(), out, length)
    }
}

fn write_into(full_hash: i64, out: &mut [u8], length: usize) -> Result<usize> {
    validate_length(length)?;
    if out.len() < length {
        return Err(GeoError::BufferTooSmall {
            needed: length,
            available: out.len(),
        });
    }
    fill(full_hash, &mut out[..length]);
    Ok(length)
}

impl FromStr for GeoCoordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_geohash(s)
    }
}
