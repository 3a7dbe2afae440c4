//! Encode geometries as GeoJSON through any [`serde::Serializer`].
//!
//! Output is streamed: objects and arrays are opened, filled and closed in document order,
//! nothing is buffered.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::algorithm::native::bounding_rect::BoundingRect;
use crate::error::GeoJsonError;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use crate::io::geojson::codec::{default_codec, GeometryCodec};
use crate::io::geojson::coord::OrdinateFormat;
use crate::io::geojson::field;
use crate::trait_::GeometryTrait;

/// A geometry the encoder knows how to lay out.
pub trait GeoJsonWrite: GeometryTrait {
    /// Write the payload member, `coordinates` or `geometries`, into an open object.
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error>;
}

/// A geometry bound to the codec that encodes it.
///
/// Serializing this writes `type`, then `bbox` when the codec's policy asks for one and the
/// geometry is not empty, then the payload.
pub struct Encoded<'a, G: ?Sized> {
    codec: &'a GeometryCodec,
    geometry: &'a G,
}

impl<'a, G: ?Sized> Encoded<'a, G> {
    pub(crate) fn new(codec: &'a GeometryCodec, geometry: &'a G) -> Self {
        Self { codec, geometry }
    }
}

impl<G: GeoJsonWrite + ?Sized> Serialize for Encoded<'_, G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let geometry_type = self.geometry.geometry_type();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(field::TYPE, geometry_type.as_str())?;
        if self.codec.bounding_box_policy().include_for(geometry_type) {
            let mut rect = BoundingRect::new();
            rect.add_geometry(self.geometry);
            // None for empty geometries
            if let Some(bbox) = rect.to_bbox() {
                map.serialize_entry(field::BBOX, &bbox)?;
            }
        }
        self.geometry.serialize_members(self.codec, &mut map)?;
        map.end()
    }
}

/// Nested coordinate arrays, from a single `[x, y]` up to a multi polygon.
trait WriteCoordinates {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error>;
}

struct Coordinates<'a, T: ?Sized> {
    format: &'a OrdinateFormat,
    value: &'a T,
}

impl<'a, T: ?Sized> Coordinates<'a, T> {
    fn new(format: &'a OrdinateFormat, value: &'a T) -> Self {
        Self { format, value }
    }
}

impl<T: WriteCoordinates + ?Sized> Serialize for Coordinates<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize_coordinates(self.format, serializer)
    }
}

impl WriteCoordinates for Coord {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(S::Error::custom(non_finite(self)));
        }

        // A NaN or infinite z is treated as absent
        let z = self.z.filter(|z| z.is_finite());
        let mut seq = serializer.serialize_seq(Some(if z.is_some() { 3 } else { 2 }))?;
        seq.serialize_element(&format.canonicalize(self.x))?;
        seq.serialize_element(&format.canonicalize(self.y))?;
        if let Some(z) = z {
            seq.serialize_element(&format.canonicalize(z))?;
        }
        seq.end()
    }
}

impl WriteCoordinates for Point {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.coord().serialize_coordinates(format, serializer)
    }
}

impl WriteCoordinates for LineString {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.coords().serialize_coordinates(format, serializer)
    }
}

impl WriteCoordinates for Polygon {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_seq(Some(0))?.end();
        }

        let mut seq = serializer.serialize_seq(Some(1 + self.num_interiors()))?;
        for ring in self.rings() {
            seq.serialize_element(&Coordinates::new(format, ring))?;
        }
        seq.end()
    }
}

impl<T: WriteCoordinates> WriteCoordinates for [T] {
    fn serialize_coordinates<S: Serializer>(
        &self,
        format: &OrdinateFormat,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(&Coordinates::new(format, item))?;
        }
        seq.end()
    }
}

fn serialize_coordinates_member<M: SerializeMap, T: WriteCoordinates + ?Sized>(
    codec: &GeometryCodec,
    map: &mut M,
    value: &T,
) -> Result<(), M::Error> {
    map.serialize_entry(
        field::COORDINATES,
        &Coordinates::new(codec.ordinate_format(), value),
    )
}

pub(crate) fn non_finite(coord: &Coord) -> GeoJsonError {
    GeoJsonError::InvalidCoordinateShape(format!(
        "non-finite ordinate in ({}, {})",
        coord.x, coord.y
    ))
}

impl GeoJsonWrite for Point {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self)
    }
}

impl GeoJsonWrite for LineString {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self)
    }
}

impl GeoJsonWrite for Polygon {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self)
    }
}

impl GeoJsonWrite for MultiPoint {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self.points())
    }
}

impl GeoJsonWrite for MultiLineString {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self.lines())
    }
}

impl GeoJsonWrite for MultiPolygon {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        serialize_coordinates_member(codec, map, self.polygons())
    }
}

struct Members<'a> {
    codec: &'a GeometryCodec,
    geometries: &'a [Geometry],
}

impl Serialize for Members<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.geometries.len()))?;
        for geometry in self.geometries {
            seq.serialize_element(&Encoded::new(self.codec, geometry))?;
        }
        seq.end()
    }
}

impl GeoJsonWrite for GeometryCollection {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        let members = Members {
            codec,
            geometries: self.geometries(),
        };
        map.serialize_entry(field::GEOMETRIES, &members)
    }
}

impl GeoJsonWrite for Geometry {
    fn serialize_members<M: SerializeMap>(
        &self,
        codec: &GeometryCodec,
        map: &mut M,
    ) -> Result<(), M::Error> {
        match self {
            Geometry::Point(g) => g.serialize_members(codec, map),
            Geometry::LineString(g) => g.serialize_members(codec, map),
            Geometry::Polygon(g) => g.serialize_members(codec, map),
            Geometry::MultiPoint(g) => g.serialize_members(codec, map),
            Geometry::MultiLineString(g) => g.serialize_members(codec, map),
            Geometry::MultiPolygon(g) => g.serialize_members(codec, map),
            Geometry::GeometryCollection(g) => g.serialize_members(codec, map),
        }
    }
}

macro_rules! impl_serialize {
    ($type:ty) => {
        impl Serialize for $type {
            /// Encode with the default codec options.
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                default_codec().encode(self, serializer)
            }
        }
    };
}

impl_serialize!(Geometry);
impl_serialize!(Point);
impl_serialize!(LineString);
impl_serialize!(Polygon);
impl_serialize!(MultiPoint);
impl_serialize!(MultiLineString);
impl_serialize!(MultiPolygon);
impl_serialize!(GeometryCollection);
