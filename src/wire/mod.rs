//! JSON wire adapter.
//!
//! Reads a [`GeoCoordinate`](crate::GeoCoordinate) from either of two JSON
//! shapes and writes it in the shape chosen by [`WireSettings`]:
//!
//! - Array: `[106.709437, -6.329094]`
//! - Object: `{"longitude": 106.709437, "latitude": -6.329094}`
//!
//! # Input Rules
//!
//! - Object keys match case-insensitively; unknown keys are skipped and
//!   missing keys read as 0.0
//! - Array elements past the second are skipped
//! - Numeric strings such as `"106.7"` are accepted
//! - Unparseable strings, `null` and booleans read as 0.0 unless strict
//!   parsing is requested, in which case they are errors
//! - Range validation always applies
//!
//! The plain `Serialize`/`Deserialize` impls use the array form and the
//! lenient policy.

mod de;
pub mod error;
mod ser;
pub mod settings;

pub use de::CoordinateSeed;
pub use error::WireError;
pub use ser::{object, Formatted};
pub use settings::{KeyCase, Representation, WireSettings};
