//! Error types for coordinate construction and encoding.
//!
//! Every failure is local and synchronous: a value outside its domain is
//! rejected at the call that received it.

use thiserror::Error;

/// Error type for coordinate operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Longitude outside `[-180, 180]`.
    #[error("Longitude out of range [-180, 180]: {0}")]
    LongitudeOutOfRange(f64),

    /// Latitude outside `[-90, 90]`.
    #[error("Latitude out of range [-90, 90]: {0}")]
    LatitudeOutOfRange(f64),

    /// Bit precision outside `[0, 60]`.
    #[error("Hash precision out of range [0, 60]: {0}")]
    PrecisionOutOfRange(i32),

    /// Geohash length outside `[1, 12]`.
    #[error("Geohash length out of range [1, 12]: {0}")]
    GeohashLengthOutOfRange(usize),

    /// Geohash string is empty or contains a character outside the alphabet.
    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    /// Output buffer cannot hold the requested geohash.
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes provided.
        available: usize,
    },
}

impl GeoError {
    /// Returns true for domain violations (coordinates, precision, length).
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::LongitudeOutOfRange(_)
                | Self::LatitudeOutOfRange(_)
                | Self::PrecisionOutOfRange(_)
                | Self::GeohashLengthOutOfRange(_)
        )
    }

    /// Returns true for malformed geohash input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidGeohash(_))
    }
}

/// Result type alias for coordinate operations.
pub type Result<T> = std::result::Result<T, GeoError>;
