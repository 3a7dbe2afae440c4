use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::geometry::GeometryType;

/// Decides, per geometry type, whether the encoder writes a `bbox` member.
///
/// Empty geometries never get a `bbox`, whatever the policy says.
#[derive(Clone, Default)]
pub enum BoundingBoxPolicy {
    /// No `bbox` anywhere.
    #[default]
    Never,
    /// A `bbox` on every non-empty geometry, nested ones included.
    Always,
    /// A `bbox` only on the listed types.
    ForTypes(HashSet<GeometryType>),
    /// Any other rule.
    Custom(Arc<dyn Fn(GeometryType) -> bool + Send + Sync>),
}

impl BoundingBoxPolicy {
    pub fn for_types(types: impl IntoIterator<Item = GeometryType>) -> Self {
        Self::ForTypes(types.into_iter().collect())
    }

    pub fn custom(predicate: impl Fn(GeometryType) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    pub fn include_for(&self, geometry_type: GeometryType) -> bool {
        match self {
            BoundingBoxPolicy::Never => false,
            BoundingBoxPolicy::Always => true,
            BoundingBoxPolicy::ForTypes(types) => types.contains(&geometry_type),
            BoundingBoxPolicy::Custom(predicate) => predicate(geometry_type),
        }
    }
}

impl fmt::Debug for BoundingBoxPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundingBoxPolicy::Never => f.write_str("Never"),
            BoundingBoxPolicy::Always => f.write_str("Always"),
            BoundingBoxPolicy::ForTypes(types) => {
                let mut types: Vec<_> = types.iter().collect();
                types.sort();
                f.debug_tuple("ForTypes").field(&types).finish()
            }
            BoundingBoxPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
