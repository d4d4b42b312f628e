use std::cmp::Ordering;

use super::{point_set::PointSet, types::Point};

/// `x` first, `y` breaks ties. Coordinates are finite, so `total_cmp` agrees
/// with the usual order except for signed zeros, which `+ 0.0` folds.
#[inline]
fn cmp_xy(p: &Point, q: &Point) -> Ordering {
    (p.x + 0.0)
        .total_cmp(&(q.x + 0.0))
        .then_with(|| (p.y + 0.0).total_cmp(&(q.y + 0.0)))
}

/// Leftmost and rightmost points of `set` (`None` when empty).
///
/// Ties on the minimum `x` pick the lowest `y`; ties on the maximum `x` pick
/// the highest `y`. For a deduplicated set with at least two points the two
/// anchors are distinct, even when every point shares the same `x`.
pub fn find_extremes(set: &PointSet) -> Option<(Point, Point)> {
    let left = set.iter().copied().min_by(cmp_xy)?;
    let right = set.iter().copied().max_by(cmp_xy)?;
    Some((left, right))
}
