use crate::geometry::{Coord, GeometryType, LineString};
use crate::trait_::GeometryTrait;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[LineString] {
        &self.0
    }

    pub fn line(&self, i: usize) -> Option<&LineString> {
        self.0.get(i)
    }

    pub fn num_lines(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl GeometryTrait for MultiLineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        Box::new(self.0.iter().flat_map(|line| line.coords().iter()))
    }
}
