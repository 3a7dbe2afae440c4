use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Convert a [`Coord`] to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a [`Point`] to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(coord_to_geo(point.coord()))
}

/// Convert a [`LineString`] to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert a [`Polygon`] to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = line_string_to_geo(polygon.exterior());
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a [`MultiPoint`] to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert a [`MultiLineString`] to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .lines()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a [`MultiPolygon`] to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a [`GeometryCollection`] to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        geometry_collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert a [`Geometry`] to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

pub fn line_string_from_geo(line_string: &geo::LineString) -> LineString {
    LineString::new(
        line_string
            .coords()
            .map(|c| Coord::new(c.x, c.y))
            .collect(),
    )
}

pub fn polygon_from_geo(polygon: &geo::Polygon) -> Polygon {
    Polygon::new(
        line_string_from_geo(polygon.exterior()),
        polygon.interiors().iter().map(line_string_from_geo).collect(),
    )
}

/// Convert a [`geo::Geometry`] to a [`Geometry`].
///
/// `Line`, `Rect` and `Triangle` have no GeoJSON counterpart and are rejected with
/// [`GeoJsonError::UnsupportedGeometryVariant`].
pub fn geometry_from_geo(geometry: &geo::Geometry) -> Result<Geometry> {
    let geometry = match geometry {
        geo::Geometry::Point(g) => Point::new(g.x(), g.y()).into(),
        geo::Geometry::LineString(g) => line_string_from_geo(g).into(),
        geo::Geometry::Polygon(g) => polygon_from_geo(g).into(),
        geo::Geometry::MultiPoint(g) => g
            .iter()
            .map(|p| Coord::new(p.x(), p.y()))
            .collect::<MultiPoint>()
            .into(),
        geo::Geometry::MultiLineString(g) => {
            MultiLineString::new(g.iter().map(line_string_from_geo).collect()).into()
        }
        geo::Geometry::MultiPolygon(g) => {
            MultiPolygon::new(g.iter().map(polygon_from_geo).collect()).into()
        }
        geo::Geometry::GeometryCollection(g) => GeometryCollection::new(
            g.iter()
                .map(geometry_from_geo)
                .collect::<Result<Vec<_>>>()?,
        )
        .into(),
        geo::Geometry::Line(_) => return Err(unsupported("Line")),
        geo::Geometry::Rect(_) => return Err(unsupported("Rect")),
        geo::Geometry::Triangle(_) => return Err(unsupported("Triangle")),
    };
    Ok(geometry)
}

fn unsupported(name: &str) -> GeoJsonError {
    GeoJsonError::UnsupportedGeometryVariant(name.to_string())
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geo(value)
    }
}

impl From<Geometry> for geo::Geometry {
    fn from(value: Geometry) -> Self {
        geometry_to_geo(&value)
    }
}

impl TryFrom<&geo::Geometry> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: &geo::Geometry) -> Result<Self> {
        geometry_from_geo(value)
    }
}

impl TryFrom<geo::Geometry> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: geo::Geometry) -> Result<Self> {
        geometry_from_geo(&value)
    }
}
