use crate::geometry::{Coord, GeometryType, LineString};
use crate::trait_::GeometryTrait;

/// A shell ring with zero or more hole rings.
///
/// An empty polygon has an empty shell and no holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: LineString,
    interiors: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// The shell ring.
    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }

    /// The hole rings.
    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    pub fn interior(&self, i: usize) -> Option<&LineString> {
        self.interiors.get(i)
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    /// Shell first, then holes.
    pub fn rings(&self) -> impl Iterator<Item = &LineString> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn into_inner(self) -> (LineString, Vec<LineString>) {
        (self.exterior, self.interiors)
    }
}

impl GeometryTrait for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.rings().flat_map(|ring| ring.coords().iter()))
    }
}
