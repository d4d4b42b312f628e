use super::assemble::{assemble, HullBoundary};
use crate::geom2::{Point, PointSet};

/// A hull plus its vertices in discovery order.
///
/// Discovery order is: the two anchors (leftmost, rightmost), then every
/// farthest point as the recursion selected it, upper side before lower side.
/// For fewer than three distinct inputs it is the deduplicated input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullTrace {
    pub hull: HullBoundary,
    pub discovery: Vec<Point>,
}

impl HullTrace {
    /// Hulls of each discovery prefix, for replaying the construction.
    ///
    /// Entry `k` is the hull of the first `k + 1` discovered vertices; the last
    /// entry has the same vertices as `self.hull`.
    pub fn steps(&self) -> Vec<HullBoundary> {
        (1..=self.discovery.len())
            .map(|k| assemble(PointSet::from_finite(self.discovery[..k].iter().copied()), None))
            .collect()
    }
}
