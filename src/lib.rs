//! Encode and decode [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) geometry
//! objects, with canonical ordinate rounding, optional bounding boxes, and typed decoding.
//!
//! ```
//! use geojson_codec::geometry::{Geometry, LineString};
//! use geojson_codec::io::geojson::GeometryCodec;
//!
//! let codec = GeometryCodec::new();
//! let geometry = codec
//!     .decode_str(r#"{"type": "LineString", "coordinates": [[0, 0], [0.123456789, 1]]}"#)
//!     .unwrap();
//! assert!(matches!(geometry, Geometry::LineString(_)));
//! assert_eq!(
//!     codec.to_string(&geometry).unwrap(),
//!     r#"{"type":"LineString","coordinates":[[0.0,0.0],[0.12345679,1.0]]}"#
//! );
//!
//! let text = codec.to_string(&geometry).unwrap();
//! let line: LineString = codec.narrow().decode_str(&text).unwrap();
//! assert_eq!(line.num_coords(), 2);
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoJsonError, Result};
pub use geometry::{Geometry, GeometryType};
pub use io::geojson::{GeometryCodec, TypeNarrowingDecoder};
pub use trait_::GeometryTrait;

pub mod algorithm;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
