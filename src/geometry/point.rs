use crate::geometry::{Coord, GeometryType};
use crate::trait_::GeometryTrait;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub Coord);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Coord::new(x, y))
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self(Coord::new_3d(x, y, z))
    }

    pub fn coord(&self) -> &Coord {
        &self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> Option<f64> {
        self.0.z
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(value)
    }
}

impl GeometryTrait for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(std::iter::once(&self.0))
    }
}
