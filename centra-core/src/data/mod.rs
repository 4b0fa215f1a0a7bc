// Modules
mod points;

// Re-exports
pub use points::{Error, Float, PointSet, euclidean, euclidean_sq};
