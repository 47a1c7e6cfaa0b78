//! Geographic coordinate encoding.
//!
//! A validated (longitude, latitude) value with two lossy, reversible
//! encodings: a 60-bit bit-interleaved integer hash and its base-32 geohash
//! text form. Also provides haversine distance and a JSON wire adapter.
//!
//! # Example
//!
//! ```
//! use geo_coordinate::GeoCoordinate;
//!
//! let coord = GeoCoordinate::new(106.709_437, -6.329_094).unwrap();
//! assert_eq!(coord.hash(), 3_195_111_357_704_980);
//! assert_eq!(coord.to_geohash(), "qqggupz6q57");
//!
//! let json = serde_json::to_string(&coord).unwrap();
//! assert_eq!(json, "[106.709437,-6.329094]");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod coordinate;
pub mod wire;

pub use coordinate::{distance, geohash, hash};
pub use coordinate::{GeoCoordinate, GeoError, HashedCoordinate};
