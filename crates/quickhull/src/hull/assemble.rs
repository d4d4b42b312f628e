use super::expand::expand;
use super::trace::HullTrace;
use crate::error::InvalidInputError;
use crate::geom2::{find_extremes, orient2d, Line, Point, PointSet, Side};

/// `a × b`, twice the signed area of the triangle `(0, a, b)`.
#[inline]
fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Convex hull boundary in counter-clockwise order.
///
/// Invariants:
/// - vertices are distinct members of the input;
/// - with three or more vertices, every consecutive cyclic triple turns
///   strictly left (no collinear vertices, also when several points tie for
///   the farthest distance);
/// - the first vertex is the leftmost anchor whenever the input had at least
///   three distinct points; smaller inputs keep their deduplicated order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HullBoundary {
    vertices: Vec<Point>,
}

impl HullBoundary {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Directed edges of the closed polygon, last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// `p` lies inside or on the closed boundary.
    ///
    /// One vertex: `p` equals it. Two vertices: `p` is on the segment.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => {
                orient2d(*a, *b, p) == 0.0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            _ => self.edges().all(|(a, b)| orient2d(a, b, p) >= 0.0),
        }
    }

    /// Enclosed area (shoelace); zero for fewer than three vertices.
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        0.5 * self.edges().map(|(a, b)| cross(a, b)).sum::<f64>()
    }

    /// Length of the closed boundary. A two-vertex hull is walked there and back.
    pub fn perimeter(&self) -> f64 {
        if self.vertices.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| (b - a).norm()).sum()
    }
}

/// Build the boundary of a validated set, recording discovery order if asked.
pub(crate) fn assemble(set: PointSet, mut discovery: Option<&mut Vec<Point>>) -> HullBoundary {
    if set.is_degenerate() {
        if let Some(d) = discovery {
            d.extend(set.iter().copied());
        }
        return HullBoundary {
            vertices: set.into_vec(),
        };
    }
    let Some((left, right)) = find_extremes(&set) else {
        return HullBoundary::default();
    };
    if let Some(d) = discovery.as_deref_mut() {
        d.push(left);
        d.push(right);
    }

    let anchor = Line::new(left, right);
    let mut above = Vec::new();
    let mut below = Vec::new();
    for p in set.into_vec() {
        match anchor.side(p) {
            Side::Left => above.push(p),
            Side::Right => below.push(p),
            // anchors and points on the anchor segment
            Side::On => {}
        }
    }

    let upper = expand(anchor, above, discovery.as_deref_mut());
    let lower = expand(anchor.reversed(), below, discovery);

    let mut vertices = Vec::with_capacity(upper.len() + lower.len() + 2);
    vertices.push(left);
    vertices.extend(lower);
    vertices.push(right);
    vertices.extend(upper);
    HullBoundary { vertices }
}

/// Convex hull of `points`, counter-clockwise.
///
/// Duplicates are ignored. Fails only on non-finite coordinates.
pub fn compute_convex_hull(points: &[Point]) -> Result<HullBoundary, InvalidInputError> {
    let set = PointSet::from_points(points)?;
    Ok(assemble(set, None))
}

/// Convex hull of raw coordinate rows; rows must have exactly two finite entries.
pub fn compute_convex_hull_rows<R: AsRef<[f64]>>(
    rows: &[R],
) -> Result<HullBoundary, InvalidInputError> {
    let set = PointSet::from_rows(rows)?;
    Ok(assemble(set, None))
}

/// Convex hull together with the order in which its vertices were found.
pub fn compute_convex_hull_traced(points: &[Point]) -> Result<HullTrace, InvalidInputError> {
    let set = PointSet::from_points(points)?;
    let mut discovery = Vec::new();
    let hull = assemble(set, Some(&mut discovery));
    Ok(HullTrace { hull, discovery })
}
