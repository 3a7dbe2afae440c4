//! Construction of geometries from decoded coordinates.
//!
//! The decoder never builds geometries itself. Every variant goes through a
//! [`GeometryFactory`], which owns precision snapping, ring validation and the spatial
//! reference identifier.

use std::fmt::Debug;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// WGS 84, the reference system GeoJSON mandates.
pub const DEFAULT_SRID: i32 = 4326;

/// Smallest number of coordinates in a non-empty ring.
pub const MINIMUM_RING_SIZE: usize = 4;

/// How x and y ordinates are snapped when a geometry is built.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PrecisionModel {
    /// Full float64 precision, ordinates are left untouched.
    #[default]
    Floating,
    /// Ordinates are rounded to the nearest float32.
    FloatingSingle,
    /// Ordinates are rounded half-up to a grid of `1 / scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// A fixed grid of `1 / scale`, e.g. a scale of `1000.` keeps three decimals.
    pub fn fixed(scale: f64) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.) {
            return Err(GeoJsonError::InvalidConfiguration(format!(
                "precision scale must be positive and finite, got {scale}"
            )));
        }
        Ok(Self::Fixed { scale })
    }

    pub fn make_precise(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        match self {
            PrecisionModel::Floating => value,
            PrecisionModel::FloatingSingle => value as f32 as f64,
            PrecisionModel::Fixed { scale } => (value * scale + 0.5).floor() / scale,
        }
    }

    /// Snap x and y. The z ordinate is kept as is.
    pub fn make_precise_coord(&self, coord: &Coord) -> Coord {
        Coord {
            x: self.make_precise(coord.x),
            y: self.make_precise(coord.y),
            z: coord.z,
        }
    }
}

/// Builds each geometry variant from raw coordinates.
///
/// All creation methods have default implementations that snap coordinates through
/// [`precision_model`](Self::precision_model), so an implementor only overrides what it
/// needs to change.
pub trait GeometryFactory: Debug + Send + Sync {
    /// Spatial reference identifier of the geometries built by this factory.
    fn srid(&self) -> i32;

    fn precision_model(&self) -> PrecisionModel {
        PrecisionModel::Floating
    }

    fn create_coord(&self, coord: Coord) -> Coord {
        self.precision_model().make_precise_coord(&coord)
    }

    fn create_point(&self, coord: Coord) -> Result<Point> {
        Ok(Point(self.create_coord(coord)))
    }

    fn create_line_string(&self, coords: Vec<Coord>) -> Result<LineString> {
        Ok(LineString::new(
            coords.into_iter().map(|c| self.create_coord(c)).collect(),
        ))
    }

    /// A polygon ring. Non-empty rings must be closed and hold at least
    /// [`MINIMUM_RING_SIZE`] coordinates.
    fn create_linear_ring(&self, coords: Vec<Coord>) -> Result<LineString> {
        validate_ring(&coords)?;
        self.create_line_string(coords)
    }

    /// An empty shell only admits empty holes.
    fn create_polygon(&self, shell: LineString, holes: Vec<LineString>) -> Result<Polygon> {
        if shell.coords().is_empty() && holes.iter().any(|hole| !hole.coords().is_empty()) {
            return Err(GeoJsonError::InvalidGeometryShape(
                "shell is empty but holes are not".to_string(),
            ));
        }
        Ok(Polygon::new(shell, holes))
    }

    fn create_multi_point_from_coords(&self, coords: Vec<Coord>) -> Result<MultiPoint> {
        let points = coords
            .into_iter()
            .map(|c| self.create_point(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPoint::new(points))
    }

    fn create_multi_line_string(&self, lines: Vec<LineString>) -> Result<MultiLineString> {
        Ok(MultiLineString::new(lines))
    }

    fn create_multi_polygon(&self, polygons: Vec<Polygon>) -> Result<MultiPolygon> {
        Ok(MultiPolygon::new(polygons))
    }

    fn create_geometry_collection(&self, geometries: Vec<Geometry>) -> Result<GeometryCollection> {
        Ok(GeometryCollection::new(geometries))
    }
}

fn validate_ring(coords: &[Coord]) -> Result<()> {
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return Ok(());
    };
    if !first.equals_2d(last) {
        return Err(GeoJsonError::InvalidGeometryShape(format!(
            "ring is not closed: starts at ({}, {}), ends at ({}, {})",
            first.x, first.y, last.x, last.y
        )));
    }
    if coords.len() < MINIMUM_RING_SIZE {
        return Err(GeoJsonError::InvalidGeometryShape(format!(
            "ring has {} coordinates, must be 0 or >= {MINIMUM_RING_SIZE}",
            coords.len()
        )));
    }
    Ok(())
}

/// The standard planar factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarGeometryFactory {
    precision_model: PrecisionModel,
    srid: i32,
}

impl PlanarGeometryFactory {
    pub fn new(precision_model: PrecisionModel, srid: i32) -> Self {
        Self {
            precision_model,
            srid,
        }
    }
}

impl Default for PlanarGeometryFactory {
    fn default() -> Self {
        Self::new(PrecisionModel::Floating, DEFAULT_SRID)
    }
}

impl GeometryFactory for PlanarGeometryFactory {
    fn srid(&self) -> i32 {
        self.srid
    }

    fn precision_model(&self) -> PrecisionModel {
        self.precision_model
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::trait_::GeometryTrait;

    #[test]
    fn default_factory() {
        let factory = PlanarGeometryFactory::default();
        assert_eq!(factory.srid(), 4326);
        assert_eq!(factory.precision_model(), PrecisionModel::Floating);
        let point = factory.create_point(Coord::new(1.23456789, 2.)).unwrap();
        assert_eq!(point.x(), 1.23456789);
    }

    #[test]
    fn fixed_precision_snaps_half_up() {
        let pm = PrecisionModel::fixed(100.).unwrap();
        assert_relative_eq!(pm.make_precise(1.234), 1.23);
        assert_relative_eq!(pm.make_precise(1.236), 1.24);
        assert_relative_eq!(pm.make_precise(-1.236), -1.24);
        assert!(pm.make_precise(f64::NAN).is_nan());
    }

    #[test]
    fn fixed_precision_keeps_z() {
        let factory = PlanarGeometryFactory::new(PrecisionModel::fixed(1.).unwrap(), 3857);
        let point = factory.create_point(Coord::new_3d(1.4, 2.6, 7.25)).unwrap();
        assert_eq!(point.coord(), &Coord::new_3d(1., 3., 7.25));
        assert_eq!(factory.srid(), 3857);
    }

    #[test]
    fn invalid_scale() {
        assert!(PrecisionModel::fixed(0.).is_err());
        assert!(PrecisionModel::fixed(f64::INFINITY).is_err());
    }

    #[test]
    fn single_precision() {
        let pm = PrecisionModel::FloatingSingle;
        assert_eq!(pm.make_precise(0.1), 0.1f32 as f64);
    }

    #[test]
    fn ring_validation() {
        let factory = PlanarGeometryFactory::default();
        assert!(factory.create_linear_ring(vec![]).is_ok());

        let open = vec![
            Coord::new(0., 0.),
            Coord::new(1., 0.),
            Coord::new(1., 1.),
            Coord::new(0., 1.),
        ];
        assert!(matches!(
            factory.create_linear_ring(open),
            Err(GeoJsonError::InvalidGeometryShape(_))
        ));

        let too_short = vec![Coord::new(0., 0.), Coord::new(1., 0.), Coord::new(0., 0.)];
        assert!(matches!(
            factory.create_linear_ring(too_short),
            Err(GeoJsonError::InvalidGeometryShape(_))
        ));
    }

    #[test]
    fn empty_shell_with_holes() {
        let factory = PlanarGeometryFactory::default();
        let hole = LineString::new(vec![
            Coord::new(0., 0.),
            Coord::new(1., 0.),
            Coord::new(1., 1.),
            Coord::new(0., 0.),
        ]);
        assert!(matches!(
            factory.create_polygon(LineString::default(), vec![hole]),
            Err(GeoJsonError::InvalidGeometryShape(_))
        ));

        let polygon = factory
            .create_polygon(LineString::default(), vec![LineString::default()])
            .unwrap();
        assert!(polygon.is_empty());
    }
}
