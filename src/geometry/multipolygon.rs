use crate::geometry::{Coord, GeometryType, Polygon};
use crate::trait_::GeometryTrait;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.0.get(i)
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl GeometryTrait for MultiPolygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.0.iter().flat_map(|polygon| polygon.coords_iter()))
    }
}
