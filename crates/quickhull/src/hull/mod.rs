//! QuickHull: recursive farthest-point expansion on both sides of an anchor line.
//!
//! Model
//! - Anchor on the leftmost and rightmost points, split the rest by the side of
//!   the anchor line, and grow each side by repeatedly taking the farthest
//!   candidate from the current edge. Candidates inside the triangle formed by
//!   the edge and its farthest point are dropped for good.
//! - Each recursive call owns its candidate `Vec`; partitions are disjoint and
//!   nothing is shared between calls.
//!
//! Output
//! - `HullBoundary`: counter-clockwise, starts at the leftmost anchor, no
//!   duplicates, no collinear edge points. Fewer than three distinct inputs are
//!   returned as-is; collinear inputs yield the two extremes.
//! - `HullTrace`: the boundary plus the order in which vertices were found.
//! - `onion_layers`: nested hulls obtained by peeling vertices repeatedly.

mod assemble;
mod expand;
mod layers;
mod trace;

pub use assemble::{
    compute_convex_hull, compute_convex_hull_rows, compute_convex_hull_traced, HullBoundary,
};
pub use layers::onion_layers;
pub use trace::HullTrace;
