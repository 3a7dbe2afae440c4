use std::marker::PhantomData;

use serde::de::{DeserializeSeed, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::geojson::codec::{default_codec, GeometryCodec};
use crate::trait_::GeometryTrait;

/// A type a decoded [`Geometry`] can be narrowed to.
pub trait GeometryVariant: Sized {
    /// Name used in [`GeoJsonError::TypeMismatch`].
    const NAME: &'static str;

    /// Take the decoded geometry if it is (or can stand in for) `Self`.
    fn narrow(geometry: Geometry) -> Result<Self>;
}

fn mismatch(expected: &'static str, geometry: &Geometry) -> GeoJsonError {
    GeoJsonError::TypeMismatch {
        expected,
        actual: geometry.geometry_type().as_str(),
    }
}

impl GeometryVariant for Geometry {
    const NAME: &'static str = "Geometry";

    fn narrow(geometry: Geometry) -> Result<Self> {
        Ok(geometry)
    }
}

macro_rules! impl_variant {
    ($variant:ident) => {
        impl GeometryVariant for $variant {
            const NAME: &'static str = stringify!($variant);

            fn narrow(geometry: Geometry) -> Result<Self> {
                match geometry {
                    Geometry::$variant(g) => Ok(g),
                    other => Err(mismatch(Self::NAME, &other)),
                }
            }
        }
    };
}

impl_variant!(Point);
impl_variant!(LineString);
impl_variant!(Polygon);
impl_variant!(MultiPoint);
impl_variant!(MultiLineString);
impl_variant!(MultiPolygon);

impl GeometryVariant for GeometryCollection {
    const NAME: &'static str = "GeometryCollection";

    /// The multi variants are collections too and are unpacked into their members.
    fn narrow(geometry: Geometry) -> Result<Self> {
        let collection = GeometryType::GeometryCollection;
        if !collection.is_type_or_supertype_of(geometry.geometry_type()) {
            return Err(mismatch(Self::NAME, &geometry));
        }
        match geometry {
            Geometry::GeometryCollection(g) => Ok(g),
            Geometry::MultiPoint(g) => Ok(g.into()),
            Geometry::MultiLineString(g) => Ok(g.into()),
            Geometry::MultiPolygon(g) => Ok(g.into()),
            other => Err(mismatch(Self::NAME, &other)),
        }
    }
}

/// Decodes geometry objects and only accepts those of type `T`.
///
/// ```
/// use geojson_codec::io::geojson::GeometryCodec;
/// use geojson_codec::geometry::Polygon;
/// use serde_json::json;
///
/// let decoder = GeometryCodec::new().narrow::<Polygon>();
/// let line = json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]});
/// assert!(decoder.decode(&line).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TypeNarrowingDecoder<T> {
    codec: GeometryCodec,
    _target: PhantomData<fn() -> T>,
}

impl<T: GeometryVariant> TypeNarrowingDecoder<T> {
    pub fn new(codec: GeometryCodec) -> Self {
        Self {
            codec,
            _target: PhantomData,
        }
    }

    pub fn codec(&self) -> &GeometryCodec {
        &self.codec
    }

    pub fn decode(&self, node: &Value) -> Result<T> {
        self.codec.decode_as(node)
    }

    /// JSON `null` decodes to `None`; the type is only checked on non-null input.
    pub fn decode_nullable(&self, node: &Value) -> Result<Option<T>> {
        if node.is_null() {
            return Ok(None);
        }
        self.decode(node).map(Some)
    }

    pub fn decode_str(&self, text: &str) -> Result<T> {
        let node: Value = serde_json::from_str(text)?;
        self.decode(&node)
    }
}

impl<T: GeometryVariant> Default for TypeNarrowingDecoder<T> {
    fn default() -> Self {
        Self::new(GeometryCodec::new())
    }
}

impl<'de, T: GeometryVariant> DeserializeSeed<'de> for &TypeNarrowingDecoder<T> {
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        let node = Value::deserialize(deserializer)?;
        self.decode(&node).map_err(D::Error::custom)
    }
}

macro_rules! impl_deserialize {
    ($type:ident) => {
        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let node = Value::deserialize(deserializer)?;
                default_codec()
                    .decode_as::<$type>(&node)
                    .map_err(D::Error::custom)
            }
        }
    };
}

impl_deserialize!(Geometry);
impl_deserialize!(Point);
impl_deserialize!(LineString);
impl_deserialize!(Polygon);
impl_deserialize!(MultiPoint);
impl_deserialize!(MultiLineString);
impl_deserialize!(MultiPolygon);
impl_deserialize!(GeometryCollection);
