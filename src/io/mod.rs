//! Reading and writing GeoJSON geometries, plus interoperability with the `geo` crate.

pub mod geo;
pub mod geojson;
