//! The in-memory geometry model: seven variants, the last one recursive.

pub use coord::Coord;
pub use geometry_type::GeometryType;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod coord;
mod geometry_type;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use crate::algorithm::native::eq::geometry_eq;
use crate::trait_::GeometryTrait;

/// Any of the seven GeoJSON geometry variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Same variant and structure, coordinates equal on x and y within `tolerance`.
    pub fn equals_exact(&self, other: &Geometry, tolerance: f64) -> bool {
        geometry_eq(self, other, tolerance)
    }
}

impl GeometryTrait for Geometry {
    fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(g) => g.geometry_type(),
            Geometry::LineString(g) => g.geometry_type(),
            Geometry::Polygon(g) => g.geometry_type(),
            Geometry::MultiPoint(g) => g.geometry_type(),
            Geometry::MultiLineString(g) => g.geometry_type(),
            Geometry::MultiPolygon(g) => g.geometry_type(),
            Geometry::GeometryCollection(g) => g.geometry_type(),
        }
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Geometry::Point(g) => g.coords_iter(),
            Geometry::LineString(g) => g.coords_iter(),
            Geometry::Polygon(g) => g.coords_iter(),
            Geometry::MultiPoint(g) => g.coords_iter(),
            Geometry::MultiLineString(g) => g.coords_iter(),
            Geometry::MultiPolygon(g) => g.coords_iter(),
            Geometry::GeometryCollection(g) => g.coords_iter(),
        }
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(value: $variant) -> Self {
                Geometry::$variant(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);
impl_from_variant!(GeometryCollection);
