//! QuickHull for planar point sets.
//!
//! Layout
//! - `geom2`: points, directed lines, the orientation predicate, deduplicated
//!   point sets and the extreme anchors.
//! - `hull`: the recursive expansion, the assembler producing a CCW boundary,
//!   discovery traces and onion layers.
//! - `scatter`: seeded random point clouds for demos, tests and benches.
//!
//! Conventions
//! - Coordinates are `f64` and compared exactly. No tolerances are applied:
//!   a point is "on" a line only when the cross product is exactly zero.
//! - Boundaries are counter-clockwise and not closed in storage (the first
//!   vertex implicitly follows the last).

pub mod api;
pub mod error;
pub mod geom2;
pub mod hull;
pub mod scatter;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::InvalidInputError;
pub use geom2::Point;
pub use hull::{
    compute_convex_hull, compute_convex_hull_rows, compute_convex_hull_traced, onion_layers,
    HullBoundary, HullTrace,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::InvalidInputError;
    pub use crate::geom2::{orient2d, Line, Point, PointSet, Side};
    pub use crate::hull::{
        compute_convex_hull, compute_convex_hull_rows, compute_convex_hull_traced, onion_layers,
        HullBoundary, HullTrace,
    };
    pub use crate::scatter::{draw_scatter, Bounds2, PointCount, ReplayToken, ScatterCfg};
    pub use nalgebra::Vector2 as Vec2;
}
