use crate::geometry::{Coord, GeometryType, Point};
use crate::trait_::GeometryTrait;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn point(&self, i: usize) -> Option<&Point> {
        self.0.get(i)
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Coord> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().map(Point).collect())
    }
}

impl GeometryTrait for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.0.iter().map(|point| point.coord()))
    }
}
