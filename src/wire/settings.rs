//! Wire format settings.

use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};

use super::de::CoordinateSeed;
use super::error::Result;
use super::ser::Formatted;
use crate::coordinate::GeoCoordinate;

/// Output shape of a serialized coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// `[longitude, latitude]`
    #[default]
    Array,
    /// `{"longitude": .., "latitude": ..}`
    Object,
}

/// Casing of object keys on output. Input keys are always case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyCase {
    /// `longitude` / `latitude`
    #[default]
    Lower,
    /// `Longitude` / `Latitude`
    Pascal,
}

impl KeyCase {
    /// Returns the `(longitude, latitude)` key pair.
    #[must_use]
    pub const fn keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Lower => ("longitude", "latitude"),
            Self::Pascal => ("Longitude", "Latitude"),
        }
    }
}

/// Settings for reading and writing coordinates as JSON.
///
/// These settings are plain data and can themselves be loaded from
/// configuration. Missing fields take their defaults.
///
/// # Example
///
/// ```
/// use geo_coordinate::wire::{Representation, WireSettings};
/// use geo_coordinate::GeoCoordinate;
///
/// let settings: WireSettings =
///     serde_json::from_str(r#"{"representation": "object"}"#).unwrap();
/// assert_eq!(settings.representation, Representation::Object);
/// assert!(settings.lenient_numbers);
///
/// let coord = GeoCoordinate::new(106.5, -6.25).unwrap();
/// let json = settings.to_json(&coord).unwrap();
/// assert_eq!(json, r#"{"longitude":106.5,"latitude":-6.25}"#);
/// assert_eq!(settings.from_json(&json).unwrap(), coord);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireSettings {
    /// Output shape (default: array)
    pub representation: Representation,

    /// Object key casing on output (default: lower case)
    pub key_case: KeyCase,

    /// Whether unparseable numeric strings, nulls and booleans read as 0.0
    /// (default: true). When disabled they are rejected.
    pub lenient_numbers: bool,
}

impl Default for WireSettings {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            key_case: KeyCase::default(),
            lenient_numbers: true,
        }
    }
}

impl WireSettings {
    /// Deserialization seed matching these settings.
    #[must_use]
    pub const fn seed(&self) -> CoordinateSeed {
        CoordinateSeed {
            lenient: self.lenient_numbers,
        }
    }

    /// Binds a coordinate to these settings for serialization.
    #[must_use]
    pub const fn format<'a>(&'a self, coordinate: &'a GeoCoordinate) -> Formatted<'a> {
        Formatted::new(coordinate, self)
    }

    /// Converts a coordinate to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self, coordinate: &GeoCoordinate) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.format(coordinate))?)
    }

    /// Converts a coordinate to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, coordinate: &GeoCoordinate) -> Result<String> {
        Ok(serde_json::to_string(&self.format(coordinate))?)
    }

    /// Converts a coordinate to an indented JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self, coordinate: &GeoCoordinate) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.format(coordinate))?)
    }

    /// Reads a coordinate from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error for unexpected shapes, rejected components, or
    /// out-of-range values.
    pub fn from_value(&self, value: &serde_json::Value) -> Result<GeoCoordinate> {
        Ok(self.seed().deserialize(value)?)
    }

    /// Reads a coordinate from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unexpected shapes, rejected
    /// components, out-of-range values, or trailing characters.
    pub fn from_json(&self, json: &str) -> Result<GeoCoordinate> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let coordinate = self.seed().deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use serde_json::json;

    fn coord() -> GeoCoordinate {
        GeoCoordinate::new(106.709_437, -6.329_094).unwrap()
    }

    #[test]
    fn default_values() {
        let settings = WireSettings::default();
        assert_eq!(settings.representation, Representation::Array);
        assert_eq!(settings.key_case, KeyCase::Lower);
        assert!(settings.lenient_numbers);
    }

    #[test]
    fn settings_roundtrip_json() {
        let settings = WireSettings {
            representation: Representation::Object,
            key_case: KeyCase::Pascal,
            lenient_numbers: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            json,
            r#"{"representation":"object","key_case":"pascal","lenient_numbers":false}"#
        );
        let parsed: WireSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_settings_fields_default() {
        let parsed: WireSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, WireSettings::default());
    }

    #[test]
    fn to_value_array_and_object() {
        let mut settings = WireSettings::default();
        assert_eq!(
            settings.to_value(&coord()).unwrap(),
            json!([106.709_437, -6.329_094])
        );

        settings.representation = Representation::Object;
        settings.key_case = KeyCase::Pascal;
        assert_eq!(
            settings.to_value(&coord()).unwrap(),
            json!({"Longitude": 106.709_437, "Latitude": -6.329_094})
        );
    }

    #[test]
    fn from_value_reads_both_forms() {
        let settings = WireSettings::default();
        let from_array = settings.from_value(&json!([106.709_437, -6.329_094])).unwrap();
        let from_object = settings
            .from_value(&json!({"latitude": -6.329_094, "longitude": 106.709_437}))
            .unwrap();
        assert_eq!(from_array, coord());
        assert_eq!(from_object, coord());
    }

    #[test]
    fn strict_settings_reject_unparseable_strings() {
        let strict = WireSettings {
            lenient_numbers: false,
            ..WireSettings::default()
        };
        assert!(strict.from_json(r#"["abc", 1.0]"#).is_err());
        assert_eq!(
            WireSettings::default()
                .from_json(r#"["abc", 1.0]"#)
                .unwrap()
                .into_parts(),
            (0.0, 1.0)
        );
    }

    #[test]
    fn from_json_rejects_trailing_characters() {
        let settings = WireSettings::default();
        assert!(settings.from_json("[1.0, 2.0] x").is_err());
        assert!(settings.from_json("[1.0, 2.0]  ").is_ok());
    }

    #[test]
    fn pretty_output_is_indented() {
        let settings = WireSettings {
            representation: Representation::Object,
            ..WireSettings::default()
        };
        let pretty = settings.to_json_pretty(&coord()).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(settings.from_json(&pretty).unwrap(), coord());
    }
}
