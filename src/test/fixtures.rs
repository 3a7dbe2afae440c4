use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

pub(crate) fn point() -> Point {
    Point::new(1.234567891, 2.345678912)
}

pub(crate) fn line_string() -> LineString {
    LineString::new(vec![Coord::new(0., 0.), Coord::new(1.1, 2.2)])
}

pub(crate) fn square() -> Polygon {
    let shell = LineString::new(vec![
        Coord::new(0., 0.),
        Coord::new(1., 0.),
        Coord::new(1., 1.),
        Coord::new(0., 1.),
        Coord::new(0., 0.),
    ]);
    Polygon::new(shell, vec![])
}

pub(crate) fn triangle() -> Polygon {
    let shell = LineString::new(vec![
        Coord::new(2., 2.),
        Coord::new(3., 2.),
        Coord::new(2., 3.),
        Coord::new(2., 2.),
    ]);
    Polygon::new(shell, vec![])
}

/// A 10x10 square with a 2x2 hole.
pub(crate) fn donut() -> Polygon {
    let shell = LineString::new(vec![
        Coord::new(0., 0.),
        Coord::new(10., 0.),
        Coord::new(10., 10.),
        Coord::new(0., 10.),
        Coord::new(0., 0.),
    ]);
    let hole = LineString::new(vec![
        Coord::new(4., 4.),
        Coord::new(6., 4.),
        Coord::new(6., 6.),
        Coord::new(4., 6.),
        Coord::new(4., 4.),
    ]);
    Polygon::new(shell, vec![hole])
}

pub(crate) fn multi_point() -> MultiPoint {
    MultiPoint::new(vec![Point::new(1., 1.), Point::new(2., 2.)])
}

pub(crate) fn multi_line_string() -> MultiLineString {
    MultiLineString::new(vec![
        LineString::new(vec![Coord::new(0., 0.), Coord::new(1., 0.)]),
        LineString::new(vec![Coord::new(0., 1.), Coord::new(1., 1.)]),
    ])
}

pub(crate) fn multi_polygon() -> MultiPolygon {
    MultiPolygon::new(vec![square(), triangle()])
}

pub(crate) fn collection() -> GeometryCollection {
    GeometryCollection::new(vec![
        Point::new(5., 6.).into(),
        LineString::new(vec![Coord::new(0., 0.), Coord::new(2., 2.)]).into(),
    ])
}

/// One geometry of every variant.
pub(crate) fn sample_geometries() -> Vec<Geometry> {
    vec![
        point().into(),
        line_string().into(),
        square().into(),
        multi_point().into(),
        multi_line_string().into(),
        multi_polygon().into(),
        collection().into(),
    ]
}

pub(crate) fn collection_json() -> &'static str {
    r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[5,6]},{"type":"LineString","coordinates":[[0,0],[2,2]]}]}"#
}
