//! Read and write GeoJSON geometry objects.
//!
//! Decoding walks a [`serde_json::Value`] tree, encoding streams straight into any
//! [`serde::Serializer`]. Both directions are driven by a [`GeometryCodec`].
//!
//! ```
//! use geojson_codec::io::geojson::{BoundingBoxPolicy, CodecOptions, GeometryCodec};
//!
//! let codec = GeometryCodec::try_new(
//!     CodecOptions::default().with_bounding_box(BoundingBoxPolicy::Always),
//! )
//! .unwrap();
//! let point = codec.decode_str(r#"{"type": "Point", "coordinates": [1, 2]}"#).unwrap();
//! assert_eq!(
//!     codec.to_string(&point).unwrap(),
//!     r#"{"type":"Point","bbox":[1.0,2.0,1.0,2.0],"coordinates":[1.0,2.0]}"#
//! );
//! ```

pub use bbox::BoundingBoxPolicy;
pub use codec::{CodecOptions, GeometryCodec};
pub use coord::{decode_coord, OrdinateFormat, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use narrow::{GeometryVariant, TypeNarrowingDecoder};
pub use writer::{Encoded, GeoJsonWrite};

mod bbox;
mod codec;
mod coord;
mod narrow;
mod reader;
mod writer;

/// Member names of a geometry object.
pub(crate) mod field {
    pub const TYPE: &str = "type";
    pub const COORDINATES: &str = "coordinates";
    pub const GEOMETRIES: &str = "geometries";
    pub const BBOX: &str = "bbox";
}
