use std::io::Write;
use std::sync::{Arc, OnceLock};

use serde::de::{DeserializeSeed, Error as _};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::Result;
use crate::factory::{GeometryFactory, PlanarGeometryFactory};
use crate::geometry::Geometry;
use crate::io::geojson::bbox::BoundingBoxPolicy;
use crate::io::geojson::coord::{OrdinateFormat, DEFAULT_DECIMAL_PLACES};
use crate::io::geojson::narrow::{GeometryVariant, TypeNarrowingDecoder};
use crate::io::geojson::reader::decode_geometry;
use crate::io::geojson::writer::{non_finite, Encoded, GeoJsonWrite};

/// Options for [`GeometryCodec`].
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Fraction digits kept for every encoded ordinate. Defaults to 8.
    pub decimal_places: u32,

    /// Which encoded geometries carry a `bbox`. Defaults to none.
    pub bounding_box: BoundingBoxPolicy,

    /// Builds decoded geometries. Defaults to a [`PlanarGeometryFactory`] in EPSG:4326.
    pub factory: Option<Arc<dyn GeometryFactory>>,
}

impl CodecOptions {
    pub fn new(
        decimal_places: u32,
        bounding_box: BoundingBoxPolicy,
        factory: Option<Arc<dyn GeometryFactory>>,
    ) -> Self {
        Self {
            decimal_places,
            bounding_box,
            factory,
        }
    }

    pub fn with_decimal_places(self, decimal_places: u32) -> Self {
        Self {
            decimal_places,
            ..self
        }
    }

    pub fn with_bounding_box(self, bounding_box: BoundingBoxPolicy) -> Self {
        Self {
            bounding_box,
            ..self
        }
    }

    pub fn with_factory(self, factory: impl GeometryFactory + 'static) -> Self {
        Self {
            factory: Some(Arc::new(factory)),
            ..self
        }
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_PLACES, BoundingBoxPolicy::Never, None)
    }
}

/// Converts between GeoJSON geometry objects and [`Geometry`] values.
///
/// A codec only holds configuration fixed at construction, so one instance can be shared
/// across threads and a failed call leaves it untouched.
#[derive(Debug, Clone)]
pub struct GeometryCodec {
    format: OrdinateFormat,
    bounding_box: BoundingBoxPolicy,
    factory: Arc<dyn GeometryFactory>,
}

impl GeometryCodec {
    /// A codec with the default options.
    pub fn new() -> Self {
        Self {
            format: OrdinateFormat::default(),
            bounding_box: BoundingBoxPolicy::default(),
            factory: Arc::new(PlanarGeometryFactory::default()),
        }
    }

    pub fn try_new(options: CodecOptions) -> Result<Self> {
        trace!(?options, "creating geometry codec");
        let format = OrdinateFormat::try_new(options.decimal_places)?;
        let factory: Arc<dyn GeometryFactory> = match options.factory {
            Some(factory) => factory,
            None => Arc::new(PlanarGeometryFactory::default()),
        };
        Ok(Self {
            format,
            bounding_box: options.bounding_box,
            factory,
        })
    }

    pub fn ordinate_format(&self) -> &OrdinateFormat {
        &self.format
    }

    pub fn bounding_box_policy(&self) -> &BoundingBoxPolicy {
        &self.bounding_box
    }

    pub fn factory(&self) -> &dyn GeometryFactory {
        self.factory.as_ref()
    }

    /// Decode a geometry object.
    pub fn decode(&self, node: &Value) -> Result<Geometry> {
        decode_geometry(node, self.factory()).map_err(|err| {
            debug!(error = %err, "failed to decode geometry");
            err
        })
    }

    /// Like [`decode`](Self::decode), but JSON `null` decodes to `None`.
    pub fn decode_nullable(&self, node: &Value) -> Result<Option<Geometry>> {
        if node.is_null() {
            return Ok(None);
        }
        self.decode(node).map(Some)
    }

    /// Parse `text` as JSON, then decode it.
    pub fn decode_str(&self, text: &str) -> Result<Geometry> {
        let node: Value = serde_json::from_str(text)?;
        self.decode(&node)
    }

    /// Decode and require a specific variant, see [`TypeNarrowingDecoder`].
    pub fn decode_as<T: GeometryVariant>(&self, node: &Value) -> Result<T> {
        T::narrow(self.decode(node)?)
    }

    /// A decoder bound to this codec that only accepts `T`.
    pub fn narrow<T: GeometryVariant>(&self) -> TypeNarrowingDecoder<T> {
        TypeNarrowingDecoder::new(self.clone())
    }

    /// Stream `geometry` into `serializer`.
    pub fn encode<G, S>(&self, geometry: &G, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        G: GeoJsonWrite + ?Sized,
        S: Serializer,
    {
        serde::Serialize::serialize(&self.encoded(geometry), serializer)
    }

    /// `geometry` bound to this codec, for embedding in other serializable values.
    pub fn encoded<'a, G: GeoJsonWrite + ?Sized>(&'a self, geometry: &'a G) -> Encoded<'a, G> {
        Encoded::new(self, geometry)
    }

    pub fn to_value<G: GeoJsonWrite + ?Sized>(&self, geometry: &G) -> Result<Value> {
        check_finite(geometry)?;
        Ok(serde_json::to_value(self.encoded(geometry))?)
    }

    pub fn to_string<G: GeoJsonWrite + ?Sized>(&self, geometry: &G) -> Result<String> {
        check_finite(geometry)?;
        Ok(serde_json::to_string(&self.encoded(geometry))?)
    }

    pub fn to_writer<G: GeoJsonWrite + ?Sized, W: Write>(
        &self,
        geometry: &G,
        writer: W,
    ) -> Result<()> {
        check_finite(geometry)?;
        serde_json::to_writer(writer, &self.encoded(geometry))?;
        Ok(())
    }
}

impl Default for GeometryCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Surface non-finite x/y as a typed error rather than a serializer message.
fn check_finite<G: GeoJsonWrite + ?Sized>(geometry: &G) -> Result<()> {
    match geometry
        .coords_iter()
        .find(|c| !(c.x.is_finite() && c.y.is_finite()))
    {
        Some(coord) => Err(non_finite(coord)),
        None => Ok(()),
    }
}

/// The codec behind the [`serde`] impls of the geometry types.
pub(crate) fn default_codec() -> &'static GeometryCodec {
    static CODEC: OnceLock<GeometryCodec> = OnceLock::new();
    CODEC.get_or_init(GeometryCodec::new)
}

impl<'de> DeserializeSeed<'de> for &GeometryCodec {
    type Value = Geometry;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        let node = Value::deserialize(deserializer)?;
        self.decode(&node).map_err(D::Error::custom)
    }
}

