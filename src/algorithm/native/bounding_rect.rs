use geo::{coord, Rect};

use crate::geometry::Coord;
use crate::trait_::GeometryTrait;

/// Running 2D extent over any number of coordinates.
///
/// The z ordinate never contributes, a GeoJSON `bbox` written by this crate is always 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    /// New
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    /// Whether no coordinate was added yet.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx
    }

    pub fn add_coord(&mut self, coord: &Coord) {
        if coord.x < self.minx {
            self.minx = coord.x;
        }
        if coord.y < self.miny {
            self.miny = coord.y;
        }
        if coord.x > self.maxx {
            self.maxx = coord.x;
        }
        if coord.y > self.maxy {
            self.maxy = coord.y;
        }
    }

    pub fn add_geometry<G: GeometryTrait + ?Sized>(&mut self, geom: &G) {
        for coord in geom.coords_iter() {
            self.add_coord(coord);
        }
    }

    /// `[minx, miny, maxx, maxy]`, the GeoJSON `bbox` member layout.
    pub fn to_bbox(&self) -> Option<[f64; 4]> {
        if self.is_empty() {
            None
        } else {
            Some([self.minx, self.miny, self.maxx, self.maxy])
        }
    }

    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let min_coord = coord! { x: self.minx, y: self.miny };
        let max_coord = coord! { x: self.maxx, y: self.maxy };
        Some(Rect::new(min_coord, max_coord))
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}
