//! Algorithms implemented on the geometry model.

pub mod native;
