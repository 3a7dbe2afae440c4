//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
    /// The `type` member is missing, is not a string, or names no known geometry.
    #[error("Invalid geometry type: {0}")]
    InvalidTypeTag(String),

    /// A coordinate array is too short, an ordinate is not numeric, or a
    /// `coordinates`/`geometries` member is missing or not an array.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinateShape(String),

    /// A geometry can not be built from structurally valid coordinates, e.g. a
    /// polygon without a shell ring.
    #[error("Invalid geometry: {0}")]
    InvalidGeometryShape(String),

    /// Narrowing decode produced a different geometry than requested.
    #[error("Invalid type for {expected}: {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A geometry outside the seven GeoJSON variants was handed to the encoder.
    #[error("Geometry type {0} is not supported.")]
    UnsupportedGeometryVariant(String),

    /// Rejected codec options.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonError>;
