//! Structural equality within a tolerance.
//!
//! Two geometries are exactly equal when they are the same variant with the same structure
//! and every pair of matching coordinates lies within `tolerance` on x and y. The z ordinate
//! is not compared.

use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

pub fn coord_eq(left: &Coord, right: &Coord, tolerance: f64) -> bool {
    if tolerance == 0. {
        return left.equals_2d(right);
    }
    (left.x - right.x).abs() <= tolerance && (left.y - right.y).abs() <= tolerance
}

pub fn point_eq(left: &Point, right: &Point, tolerance: f64) -> bool {
    coord_eq(left.coord(), right.coord(), tolerance)
}

pub fn line_string_eq(left: &LineString, right: &LineString, tolerance: f64) -> bool {
    if left.num_coords() != right.num_coords() {
        return false;
    }

    left.coords()
        .iter()
        .zip(right.coords())
        .all(|(l, r)| coord_eq(l, r, tolerance))
}

pub fn polygon_eq(left: &Polygon, right: &Polygon, tolerance: f64) -> bool {
    if left.num_interiors() != right.num_interiors() {
        return false;
    }

    if !line_string_eq(left.exterior(), right.exterior(), tolerance) {
        return false;
    }

    left.interiors()
        .iter()
        .zip(right.interiors())
        .all(|(l, r)| line_string_eq(l, r, tolerance))
}

pub fn multi_point_eq(left: &MultiPoint, right: &MultiPoint, tolerance: f64) -> bool {
    if left.num_points() != right.num_points() {
        return false;
    }

    left.points()
        .iter()
        .zip(right.points())
        .all(|(l, r)| point_eq(l, r, tolerance))
}

pub fn multi_line_string_eq(
    left: &MultiLineString,
    right: &MultiLineString,
    tolerance: f64,
) -> bool {
    if left.num_lines() != right.num_lines() {
        return false;
    }

    left.lines()
        .iter()
        .zip(right.lines())
        .all(|(l, r)| line_string_eq(l, r, tolerance))
}

pub fn multi_polygon_eq(left: &MultiPolygon, right: &MultiPolygon, tolerance: f64) -> bool {
    if left.num_polygons() != right.num_polygons() {
        return false;
    }

    left.polygons()
        .iter()
        .zip(right.polygons())
        .all(|(l, r)| polygon_eq(l, r, tolerance))
}

pub fn geometry_collection_eq(
    left: &GeometryCollection,
    right: &GeometryCollection,
    tolerance: f64,
) -> bool {
    if left.num_geometries() != right.num_geometries() {
        return false;
    }

    left.geometries()
        .iter()
        .zip(right.geometries())
        .all(|(l, r)| geometry_eq(l, r, tolerance))
}

pub fn geometry_eq(left: &Geometry, right: &Geometry, tolerance: f64) -> bool {
    match (left, right) {
        (Geometry::Point(l), Geometry::Point(r)) => point_eq(l, r, tolerance),
        (Geometry::LineString(l), Geometry::LineString(r)) => line_string_eq(l, r, tolerance),
        (Geometry::Polygon(l), Geometry::Polygon(r)) => polygon_eq(l, r, tolerance),
        (Geometry::MultiPoint(l), Geometry::MultiPoint(r)) => multi_point_eq(l, r, tolerance),
        (Geometry::MultiLineString(l), Geometry::MultiLineString(r)) => {
            multi_line_string_eq(l, r, tolerance)
        }
        (Geometry::MultiPolygon(l), Geometry::MultiPolygon(r)) => {
            multi_polygon_eq(l, r, tolerance)
        }
        (Geometry::GeometryCollection(l), Geometry::GeometryCollection(r)) => {
            geometry_collection_eq(l, r, tolerance)
        }
        _ => false,
    }
}
