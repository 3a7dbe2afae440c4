use std::fmt;
use std::str::FromStr;

use crate::error::GeoJsonError;

/// The seven geometry variants a GeoJSON document can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// All variants, in wire-table order.
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// The canonical `type` tag written to GeoJSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// The upper snake case variant name older writers emitted instead of the tag.
    pub fn variant_name(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::MultiPoint => "MULTI_POINT",
            GeometryType::LineString => "LINE_STRING",
            GeometryType::MultiLineString => "MULTI_LINE_STRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPolygon => "MULTI_POLYGON",
            GeometryType::GeometryCollection => "GEOMETRY_COLLECTION",
        }
    }

    /// Exact, case-sensitive match against the canonical tags.
    pub fn from_canonical_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Case-insensitive match against the variant names (`multi_point`, `LINE_STRING`, ...).
    pub fn from_variant_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.variant_name().eq_ignore_ascii_case(name))
    }

    /// Resolve a `type` member: surrounding whitespace is ignored, then the canonical tag is
    /// tried before the variant name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::from_canonical_tag(tag).or_else(|| Self::from_variant_name(tag))
    }

    /// Whether a geometry of type `other` is also a geometry of this type.
    ///
    /// The multi variants are collections, so `GeometryCollection` accepts them.
    pub fn is_type_or_supertype_of(&self, other: GeometryType) -> bool {
        use GeometryType::*;

        match self {
            GeometryCollection => matches!(
                other,
                GeometryCollection | MultiPoint | MultiLineString | MultiPolygon
            ),
            _ => *self == other,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| GeoJsonError::InvalidTypeTag(s.to_string()))
    }
}
