pub mod bounding_rect;
pub mod eq;
