//! Coordinate module.
//!
//! Provides a validated longitude/latitude value with:
//! - A 60-bit interleaved integer hash, maskable to any bit precision
//! - Base-32 geohash strings of 1 to 12 characters
//! - Haversine great-circle distance
//!
//! # Encoding Guarantees
//!
//! - Hashing is deterministic and never fails for a valid coordinate
//! - Decoding returns the center of the encoded cell, so round trips are
//!   exact only up to the cell size of the chosen precision
//! - Longer geohashes extend shorter ones for the same coordinate
//!
//! # Example Usage
//!
//! ```
//! use geo_coordinate::coordinate::GeoCoordinate;
//!
//! let coord = GeoCoordinate::new(106.709_437, -6.329_094).unwrap();
//! println!("Coordinate: {coord}");
//! println!("Hash (52 bits): {}", coord.hash());
//! println!("Geohash: {}", coord.to_geohash());
//!
//! let decoded = GeoCoordinate::from_geohash(&coord.to_geohash()).unwrap();
//! assert!((decoded.longitude() - coord.longitude()).abs() < 1e-5);
//! ```

pub mod distance;
pub mod error;
pub mod geohash;
pub mod hash;
pub mod types;

pub use distance::{distance, EARTH_RADIUS_METERS};
pub use error::{GeoError, Result};
pub use geohash::{DEFAULT_GEOHASH_LENGTH, MAX_GEOHASH_LENGTH};
pub use hash::{HashedCoordinate, BASE_PRECISION, DEFAULT_HASH_PRECISION};
pub use types::GeoCoordinate;
