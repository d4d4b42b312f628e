use std::collections::HashSet;

use super::types::Point;
use crate::error::InvalidInputError;

/// Validated planar points with exact duplicates removed.
///
/// Invariants:
/// - every coordinate is finite;
/// - no two elements have identical `(x, y)` (`0.0` and `-0.0` coincide);
/// - iteration order is input order of first occurrences, so tie-breaks that
///   depend on iteration order are reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pts: Vec<Point>,
}

#[inline]
fn dedup_key(p: Point) -> (u64, u64) {
    // `+ 0.0` folds -0.0 onto 0.0.
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

impl PointSet {
    /// Build from typed points. Only finiteness can fail.
    pub fn from_points(points: &[Point]) -> Result<Self, InvalidInputError> {
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(InvalidInputError::NonFinite { index });
        }
        Ok(Self::from_finite(points.iter().copied()))
    }

    /// Dedup points already known to be finite (hull vertices, remainders).
    pub(crate) fn from_finite<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut seen = HashSet::new();
        let pts = points
            .into_iter()
            .filter(|p| seen.insert(dedup_key(*p)))
            .collect();
        Self { pts }
    }

    /// Build from raw coordinate rows, checking arity before finiteness.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match row.as_ref() {
                &[x, y] => points.push(Point::new(x, y)),
                other => {
                    return Err(InvalidInputError::WrongArity {
                        index,
                        arity: other.len(),
                    })
                }
            }
        }
        Self::from_points(&points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Fewer than three distinct points: the set is its own hull.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pts.len() < 3
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.pts
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.pts.iter()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.pts.iter().any(|q| *q == p)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.pts
    }
}
