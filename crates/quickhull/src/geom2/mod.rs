//! Planar primitives for the hull computation.
//!
//! Purpose
//! - `Point`/`Line` types and the exact orientation predicate.
//! - `PointSet`: validated, deduplicated input with a fixed iteration order.
//! - `find_extremes`: the two anchors that split the problem.
//!
//! Conventions
//! - Left of a directed line means counter-clockwise side (positive cross).
//! - No epsilons: collinearity is an exact zero.

mod extremes;
mod point_set;
mod types;

pub use extremes::find_extremes;
pub use point_set::PointSet;
pub use types::{orient2d, Line, Point, Side};

#[cfg(test)]
mod tests;
