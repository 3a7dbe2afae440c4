use crate::geometry::{Coord, GeometryType};
use crate::trait_::GeometryTrait;

/// An ordered sequence of zero or more positions.
///
/// Also used for polygon rings, which are closed line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn coord(&self, i: usize) -> Option<&Coord> {
        self.0.get(i)
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    /// First and last coordinate are equal in 2D. An empty line string is closed.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => true,
        }
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl GeometryTrait for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.0.iter())
    }
}
