//! Reading coordinates from array or object form.

use std::fmt;

use serde::de::{
    self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor,
};
use serde::Deserialize;

use crate::coordinate::GeoCoordinate;

const LONGITUDE: &str = "longitude";
const LATITUDE: &str = "latitude";

/// Deserialization entry point with a configurable numeric policy.
///
/// Accepts `[longitude, latitude]` (extra elements ignored) or an object
/// whose keys match `longitude`/`latitude` case-insensitively (other keys
/// ignored, missing keys read as 0.0). Components may be numbers or numeric
/// strings.
///
/// With `lenient` set, a string that does not parse as a number, a `null`,
/// or a boolean reads as 0.0. Without it those inputs are errors.
///
/// # Example
///
/// ```
/// use geo_coordinate::wire::CoordinateSeed;
/// use serde::de::DeserializeSeed;
///
/// let json = r#"{"Latitude": "-6.329094", "LONGITUDE": 106.709437}"#;
/// let mut de = serde_json::Deserializer::from_str(json);
/// let coord = CoordinateSeed::strict().deserialize(&mut de).unwrap();
/// assert_eq!(coord.into_parts(), (106.709_437, -6.329_094));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateSeed {
    /// Read unparseable components as 0.0 instead of failing.
    pub lenient: bool,
}

impl CoordinateSeed {
    /// Seed that coerces unparseable components to 0.0.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { lenient: true }
    }

    /// Seed that rejects unparseable components.
    #[must_use]
    pub const fn strict() -> Self {
        Self { lenient: false }
    }
}

impl Default for CoordinateSeed {
    fn default() -> Self {
        Self::lenient()
    }
}

impl<'de> DeserializeSeed<'de> for CoordinateSeed {
    type Value = GeoCoordinate;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CoordinateVisitor {
            lenient: self.lenient,
        })
    }
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CoordinateSeed::default().deserialize(deserializer)
    }
}

struct CoordinateVisitor {
    lenient: bool,
}

impl CoordinateVisitor {
    const fn component(&self) -> ComponentSeed {
        ComponentSeed {
            lenient: self.lenient,
        }
    }
}

fn validated<E: de::Error>(longitude: f64, latitude: f64) -> Result<GeoCoordinate, E> {
    GeoCoordinate::new(longitude, latitude).map_err(E::custom)
}

impl<'de> Visitor<'de> for CoordinateVisitor {
    type Value = GeoCoordinate;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a [longitude, latitude] array or a longitude/latitude object")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let longitude = seq
            .next_element_seed(self.component())?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let latitude = seq
            .next_element_seed(self.component())?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        validated(longitude, latitude)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut longitude = 0.0;
        let mut latitude = 0.0;

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(LONGITUDE) {
                longitude = map.next_value_seed(self.component())?;
            } else if key.eq_ignore_ascii_case(LATITUDE) {
                latitude = map.next_value_seed(self.component())?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        validated(longitude, latitude)
    }
}

/// One numeric component: a number or a numeric string.
struct ComponentSeed {
    lenient: bool,
}

impl<'de> DeserializeSeed<'de> for ComponentSeed {
    type Value = f64;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl ComponentSeed {
    fn coerce<E: de::Error>(&self, unexpected: Unexpected<'_>) -> Result<f64, E> {
        if self.lenient {
            log::warn!("Coordinate component {unexpected} read as 0.0");
            Ok(0.0)
        } else {
            Err(E::invalid_type(unexpected, self))
        }
    }
}

impl<'de> Visitor<'de> for ComponentSeed {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match v.trim().parse::<f64>() {
            Ok(number) => Ok(number),
            Err(_) if self.lenient => {
                log::warn!("Unparseable coordinate component {v:?} read as 0.0");
                Ok(0.0)
            }
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        self.coerce(Unexpected::Bool(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        self.coerce(Unexpected::Unit)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        self.coerce(Unexpected::Option)
    }
}
