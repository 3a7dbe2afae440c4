use geo::Rect;

use crate::algorithm::native::bounding_rect::BoundingRect;
use crate::geometry::{Coord, GeometryType};

/// Read access shared by every geometry variant.
pub trait GeometryTrait {
    /// The variant this geometry encodes as.
    fn geometry_type(&self) -> GeometryType;

    /// All coordinates, depth first, in document order.
    fn coords_iter(&self) -> Box<dyn Iterator<Item = &Coord> + '_>;

    /// Number of coordinates, including those of nested members.
    fn num_coords(&self) -> usize {
        self.coords_iter().count()
    }

    /// A geometry without any coordinate.
    ///
    /// Collections whose members are all empty are empty too.
    fn is_empty(&self) -> bool {
        self.coords_iter().next().is_none()
    }

    /// The 2D envelope, `None` for an empty geometry.
    fn bounding_rect(&self) -> Option<Rect> {
        let mut rect = BoundingRect::new();
        rect.add_geometry(self);
        rect.to_rect()
    }
}
