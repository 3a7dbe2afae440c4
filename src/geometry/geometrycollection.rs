use crate::geometry::{
    Coord, Geometry, GeometryType, MultiLineString, MultiPoint, MultiPolygon,
};
use crate::trait_::GeometryTrait;

/// A heterogeneous, possibly nested, sequence of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn geometry(&self, i: usize) -> Option<&Geometry> {
        self.0.get(i)
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.0
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}

impl From<MultiPoint> for GeometryCollection {
    fn from(value: MultiPoint) -> Self {
        Self(value.0.into_iter().map(Geometry::Point).collect())
    }
}

impl From<MultiLineString> for GeometryCollection {
    fn from(value: MultiLineString) -> Self {
        Self(value.0.into_iter().map(Geometry::LineString).collect())
    }
}

impl From<MultiPolygon> for GeometryCollection {
    fn from(value: MultiPolygon) -> Self {
        Self(value.0.into_iter().map(Geometry::Polygon).collect())
    }
}

impl GeometryTrait for GeometryCollection {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.0.iter().flat_map(|geom| geom.coords_iter()))
    }
}
