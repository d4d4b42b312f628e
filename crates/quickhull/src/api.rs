//! Curated surface for front-ends (UNSTABLE).
//!
//! Front-ends (the CLI, demos, benches) import from here so that the module
//! layout underneath can change freely.

// Hull computation
pub use crate::hull::{
    compute_convex_hull, compute_convex_hull_rows, compute_convex_hull_traced, onion_layers,
    HullBoundary, HullTrace,
};
// Primitives
pub use crate::error::InvalidInputError;
pub use crate::geom2::{find_extremes, orient2d, Line, Point, PointSet, Side};
// Random point clouds
pub use crate::scatter::{
    draw_scatter, Bounds2 as ScatterBounds, PointCount, ReplayToken as ScatterReplay, ScatterCfg,
};
