//! Writing coordinates in array or object form.

use serde::ser::{SerializeStruct, SerializeTuple};
use serde::{Serialize, Serializer};

use super::settings::{KeyCase, Representation, WireSettings};
use crate::coordinate::GeoCoordinate;

/// Array form: `[longitude, latitude]`.
impl Serialize for GeoCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.longitude())?;
        tuple.serialize_element(&self.latitude())?;
        tuple.end()
    }
}

fn serialize_object<S>(
    coordinate: &GeoCoordinate,
    key_case: KeyCase,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let (longitude_key, latitude_key) = key_case.keys();
    let mut object = serializer.serialize_struct("GeoCoordinate", 2)?;
    object.serialize_field(longitude_key, &coordinate.longitude())?;
    object.serialize_field(latitude_key, &coordinate.latitude())?;
    object.end()
}

/// A coordinate bound to the [`WireSettings`] that control its output.
///
/// Obtained from [`WireSettings::format`]; useful for embedding a
/// coordinate in a larger serialized structure.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    coordinate: &'a GeoCoordinate,
    settings: &'a WireSettings,
}

impl<'a> Formatted<'a> {
    pub(crate) const fn new(coordinate: &'a GeoCoordinate, settings: &'a WireSettings) -> Self {
        Self {
            coordinate,
            settings,
        }
    }
}

impl Serialize for Formatted<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.settings.representation {
            Representation::Array => self.coordinate.serialize(serializer),
            Representation::Object => {
                serialize_object(self.coordinate, self.settings.key_case, serializer)
            }
        }
    }
}

/// Object form for `#[serde(with = "geo_coordinate::wire::object")]` fields.
///
/// Writes `{"longitude": .., "latitude": ..}`; reads either form.
///
/// # Example
///
/// ```
/// use geo_coordinate::GeoCoordinate;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Point {
///     name: String,
///     #[serde(with = "geo_coordinate::wire::object")]
///     coordinate: GeoCoordinate,
/// }
///
/// let point = Point {
///     name: "Test".to_string(),
///     coordinate: GeoCoordinate::new(106.5, -6.25).unwrap(),
/// };
/// let json = serde_json::to_string(&point).unwrap();
/// assert_eq!(
///     json,
///     r#"{"name":"Test","coordinate":{"longitude":106.5,"latitude":-6.25}}"#
/// );
/// ```
pub mod object {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{serialize_object, KeyCase};
    use crate::coordinate::GeoCoordinate;

    /// Serializes in object form with lower-case keys.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(coordinate: &GeoCoordinate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_object(coordinate, KeyCase::Lower, serializer)
    }

    /// Deserializes from array or object form.
    ///
    /// # Errors
    ///
    /// Fails on unexpected tokens or out-of-range values.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<GeoCoordinate, D::Error>
    where
        D: Deserializer<'de>,
    {
        GeoCoordinate::deserialize(deserializer)
    }
}
