//! Convert to and from [`geo`] scalars, and run them through the GeoJSON codec.

mod scalar;

pub use scalar::{
    coord_to_geo, geometry_collection_to_geo, geometry_from_geo, geometry_to_geo,
    line_string_from_geo, line_string_to_geo, multi_line_string_to_geo, multi_point_to_geo,
    multi_polygon_to_geo, point_to_geo, polygon_from_geo, polygon_to_geo,
};

use serde_json::Value;

use crate::error::Result;
use crate::io::geojson::GeometryCodec;

impl GeometryCodec {
    /// Encode a [`geo::Geometry`].
    ///
    /// `Line`, `Rect` and `Triangle` fail with
    /// [`UnsupportedGeometryVariant`](crate::error::GeoJsonError::UnsupportedGeometryVariant).
    pub fn encode_geo(&self, geometry: &geo::Geometry) -> Result<Value> {
        let geometry = geometry_from_geo(geometry)?;
        self.to_value(&geometry)
    }

    /// Decode into a [`geo::Geometry`]. Z ordinates are dropped.
    pub fn decode_geo(&self, node: &Value) -> Result<geo::Geometry> {
        let geometry = self.decode(node)?;
        Ok(geometry_to_geo(&geometry))
    }
}

#[cfg(test)]
mod test {
    use geo::{coord, point, Rect};
    use serde_json::json;

    use super::*;
    use crate::error::GeoJsonError;

    #[test]
    fn encode_geo() {
        let codec = GeometryCodec::new();
        let value = codec
            .encode_geo(&geo::Geometry::Point(point! { x: 1.5, y: -2. }))
            .unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [1.5, -2.0]}));

        let rect = Rect::new(coord! { x: 0., y: 0. }, coord! { x: 1., y: 1. });
        assert!(matches!(
            codec.encode_geo(&geo::Geometry::Rect(rect)),
            Err(GeoJsonError::UnsupportedGeometryVariant(_))
        ));
    }

    #[test]
    fn decode_geo() {
        let codec = GeometryCodec::new();
        let geometry = codec
            .decode_geo(&json!({"type": "MultiPoint", "coordinates": [[0, 1, 9], [2, 3]]}))
            .unwrap();
        assert_eq!(
            geometry,
            geo::Geometry::MultiPoint(vec![point! { x: 0., y: 1. }, point! { x: 2., y: 3. }].into())
        );
    }
}
