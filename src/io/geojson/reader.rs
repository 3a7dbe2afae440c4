//! Decode a parsed JSON tree into a [`Geometry`].

use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::factory::GeometryFactory;
use crate::geometry::{
    Coord, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::io::geojson::coord::decode_coord;
use crate::io::geojson::field;

/// Decode any geometry object, dispatching on its `type` member.
///
/// Collections call back into this function for each member, so nesting depth is bounded
/// only by the stack.
pub(crate) fn decode_geometry(node: &Value, factory: &dyn GeometryFactory) -> Result<Geometry> {
    let geometry = match decode_type(node)? {
        GeometryType::Point => decode_point(node, factory)?.into(),
        GeometryType::MultiPoint => decode_multi_point(node, factory)?.into(),
        GeometryType::LineString => decode_line_string(node, factory)?.into(),
        GeometryType::MultiLineString => decode_multi_line_string(node, factory)?.into(),
        GeometryType::Polygon => decode_polygon(node, factory)?.into(),
        GeometryType::MultiPolygon => decode_multi_polygon(node, factory)?.into(),
        GeometryType::GeometryCollection => decode_geometry_collection(node, factory)?.into(),
    };
    Ok(geometry)
}

fn decode_type(node: &Value) -> Result<GeometryType> {
    let tag = node
        .get(field::TYPE)
        .ok_or_else(|| GeoJsonError::InvalidTypeTag("missing `type` member".to_string()))?;
    let tag = tag
        .as_str()
        .ok_or_else(|| GeoJsonError::InvalidTypeTag(tag.to_string()))?;
    GeometryType::from_tag(tag).ok_or_else(|| GeoJsonError::InvalidTypeTag(tag.to_string()))
}

/// The `coordinates`/`geometries` member, which must be an array.
fn member<'a>(node: &'a Value, name: &str) -> Result<&'a Value> {
    match node.get(name) {
        Some(value) if value.is_array() => Ok(value),
        Some(value) => Err(GeoJsonError::InvalidCoordinateShape(value.to_string())),
        None => Err(GeoJsonError::InvalidCoordinateShape(format!(
            "missing `{name}` member"
        ))),
    }
}

fn as_array(node: &Value) -> Result<&[Value]> {
    node.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| GeoJsonError::InvalidCoordinateShape(node.to_string()))
}

fn decode_coords(node: &Value) -> Result<Vec<Coord>> {
    as_array(node)?.iter().map(decode_coord).collect()
}

fn decode_point(node: &Value, factory: &dyn GeometryFactory) -> Result<Point> {
    let coordinates = member(node, field::COORDINATES)?;
    factory.create_point(decode_coord(coordinates)?)
}

fn decode_multi_point(node: &Value, factory: &dyn GeometryFactory) -> Result<MultiPoint> {
    let coordinates = member(node, field::COORDINATES)?;
    factory.create_multi_point_from_coords(decode_coords(coordinates)?)
}

fn decode_line_string(node: &Value, factory: &dyn GeometryFactory) -> Result<LineString> {
    let coordinates = member(node, field::COORDINATES)?;
    factory.create_line_string(decode_coords(coordinates)?)
}

fn decode_multi_line_string(
    node: &Value,
    factory: &dyn GeometryFactory,
) -> Result<MultiLineString> {
    let coordinates = member(node, field::COORDINATES)?;
    let lines = as_array(coordinates)?
        .iter()
        .map(|line| factory.create_line_string(decode_coords(line)?))
        .collect::<Result<Vec<_>>>()?;
    factory.create_multi_line_string(lines)
}

fn decode_polygon(node: &Value, factory: &dyn GeometryFactory) -> Result<Polygon> {
    let coordinates = member(node, field::COORDINATES)?;
    decode_rings(coordinates, factory)
}

fn decode_multi_polygon(node: &Value, factory: &dyn GeometryFactory) -> Result<MultiPolygon> {
    let coordinates = member(node, field::COORDINATES)?;
    let polygons = as_array(coordinates)?
        .iter()
        .map(|rings| decode_rings(rings, factory))
        .collect::<Result<Vec<_>>>()?;
    factory.create_multi_polygon(polygons)
}

fn decode_geometry_collection(
    node: &Value,
    factory: &dyn GeometryFactory,
) -> Result<GeometryCollection> {
    let geometries = member(node, field::GEOMETRIES)?;
    let geometries = as_array(geometries)?
        .iter()
        .map(|geometry| decode_geometry(geometry, factory))
        .collect::<Result<Vec<_>>>()?;
    factory.create_geometry_collection(geometries)
}

/// Ring 0 is the shell, every following ring a hole.
fn decode_rings(node: &Value, factory: &dyn GeometryFactory) -> Result<Polygon> {
    let (shell, holes) = as_array(node)?.split_first().ok_or_else(|| {
        GeoJsonError::InvalidGeometryShape(format!("polygon without shell ring: {node}"))
    })?;
    let shell = factory.create_linear_ring(decode_coords(shell)?)?;
    let holes = holes
        .iter()
        .map(|hole| factory.create_linear_ring(decode_coords(hole)?))
        .collect::<Result<Vec<_>>>()?;
    factory.create_polygon(shell, holes)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::factory::{PlanarGeometryFactory, PrecisionModel};
    use crate::test::fixtures;

    fn decode(node: Value) -> Result<Geometry> {
        decode_geometry(&node, &PlanarGeometryFactory::default())
    }

    #[test]
    fn point() {
        let geom = decode(json!({"type": "Point", "coordinates": [1.0, 2.0]})).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(1., 2.)));
    }

    #[test]
    fn point_3d() {
        let geom = decode(json!({"type": "Point", "coordinates": [1, 2, 3]})).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new_3d(1., 2., 3.)));
    }

    #[test]
    fn line_string() {
        let geom = decode(json!({"type": "LineString", "coordinates": [[0, 0], [1.1, 2.2]]}));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::line_string()));
    }

    #[test]
    fn empty_line_string() {
        let geom = decode(json!({"type": "LineString", "coordinates": []})).unwrap();
        assert_eq!(geom, Geometry::from(LineString::default()));
    }

    #[test]
    fn polygon() {
        let geom = decode(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
        }));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::square()));
    }

    #[test]
    fn polygon_with_hole() {
        let geom = decode(json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                [[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]]
            ]
        }))
        .unwrap();
        let Geometry::Polygon(polygon) = geom else {
            panic!("expected polygon")
        };
        assert_eq!(polygon, fixtures::donut());
        assert_eq!(polygon.num_interiors(), 1);
    }

    #[test]
    fn polygon_without_shell() {
        let err = decode(json!({"type": "Polygon", "coordinates": []})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometryShape(_)));
    }

    #[test]
    fn polygon_with_holes_but_empty_shell() {
        let err = decode(json!({
            "type": "Polygon",
            "coordinates": [[], [[0, 0], [1, 0], [1, 1], [0, 0]]]
        }))
        .unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometryShape(_)));
    }

    #[test]
    fn polygon_with_open_ring() {
        let err = decode(json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]
        }))
        .unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometryShape(_)));
    }

    #[test]
    fn multi_point() {
        let geom = decode(json!({"type": "MultiPoint", "coordinates": [[1, 1], [2, 2]]}));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::multi_point()));
    }

    #[test]
    fn multi_line_string() {
        let geom = decode(json!({
            "type": "MultiLineString",
            "coordinates": [[[0, 0], [1, 0]], [[0, 1], [1, 1]]]
        }));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::multi_line_string()));
    }

    #[test]
    fn multi_polygon() {
        let geom = decode(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]],
                [[[2, 2], [3, 2], [2, 3], [2, 2]]]
            ]
        }));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::multi_polygon()));
    }

    #[test]
    fn multi_polygon_member_without_shell() {
        let err = decode(json!({"type": "MultiPolygon", "coordinates": [[]]})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometryShape(_)));
    }

    #[test]
    fn geometry_collection() {
        let node: Value = serde_json::from_str(fixtures::collection_json()).unwrap();
        let geom = decode(node).unwrap();
        let Geometry::GeometryCollection(collection) = geom else {
            panic!("expected collection")
        };
        assert_eq!(collection.num_geometries(), 2);
        assert_eq!(
            collection.geometry(0),
            Some(&Geometry::Point(Point::new(5., 6.)))
        );
        assert_eq!(
            collection.geometry(1),
            Some(&Geometry::LineString(LineString::new(vec![
                Coord::new(0., 0.),
                Coord::new(2., 2.)
            ])))
        );
    }

    #[test]
    fn nested_collections() {
        let mut node = json!({"type": "Point", "coordinates": [1, 2]});
        for _ in 0..32 {
            node = json!({"type": "GeometryCollection", "geometries": [node]});
        }
        let mut geom = decode(node).unwrap();
        let mut depth = 0;
        while let Geometry::GeometryCollection(mut collection) = geom {
            assert_eq!(collection.num_geometries(), 1);
            geom = collection.0.remove(0);
            depth += 1;
        }
        assert_eq!(depth, 32);
        assert_eq!(geom, Geometry::Point(Point::new(1., 2.)));
    }

    #[test]
    fn error_in_nested_member_propagates() {
        let err = decode(json!({
            "type": "GeometryCollection",
            "geometries": [{"type": "Point", "coordinates": [1, 2]}, {"type": "Blob"}]
        }))
        .unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidTypeTag(ref tag) if tag == "Blob"));
    }

    #[test]
    fn unknown_type() {
        let err = decode(json!({"type": "Blob", "coordinates": []})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidTypeTag(_)));
    }

    #[test]
    fn missing_or_non_string_type() {
        for node in [
            json!({"coordinates": [1, 2]}),
            json!({"type": 1, "coordinates": [1, 2]}),
            json!({"type": null}),
            json!([1, 2]),
        ] {
            assert!(matches!(
                decode(node),
                Err(GeoJsonError::InvalidTypeTag(_))
            ));
        }
    }

    #[test]
    fn variant_name_fallback() {
        let geom = decode(json!({"type": "multi_point", "coordinates": [[1, 1], [2, 2]]}));
        assert_eq!(geom.unwrap(), Geometry::from(fixtures::multi_point()));
    }

    #[test]
    fn malformed_coordinate() {
        let err = decode(json!({"type": "Point", "coordinates": [1]})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidCoordinateShape(_)));
    }

    #[test]
    fn coordinates_not_an_array() {
        for node in [
            json!({"type": "Point", "coordinates": "1,2"}),
            json!({"type": "LineString", "coordinates": {"x": 1}}),
            json!({"type": "GeometryCollection", "geometries": 5}),
        ] {
            assert!(matches!(
                decode(node),
                Err(GeoJsonError::InvalidCoordinateShape(_))
            ));
        }
    }

    #[test]
    fn missing_members() {
        for node in [
            json!({"type": "Point"}),
            json!({"type": "GeometryCollection", "coordinates": []}),
        ] {
            assert!(matches!(
                decode(node),
                Err(GeoJsonError::InvalidCoordinateShape(_))
            ));
        }
    }

    #[test]
    fn nested_level_not_an_array() {
        let err = decode(json!({"type": "MultiLineString", "coordinates": [[0, 0]]})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidCoordinateShape(_)));
    }

    #[test]
    fn factory_snaps_coordinates() {
        let factory = PlanarGeometryFactory::new(PrecisionModel::fixed(10.).unwrap(), 4326);
        let node = json!({"type": "LineString", "coordinates": [[0.04, 0.06], [1.26, 2.5]]});
        let geom = decode_geometry(&node, &factory).unwrap();
        let expected = LineString::new(vec![Coord::new(0., 0.1), Coord::new(1.3, 2.5)]);
        assert!(geom.equals_exact(&expected.into(), 1e-12));
    }
}
