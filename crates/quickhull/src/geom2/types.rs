//! Basic 2D types and the orientation predicate.
//!
//! - `Point`: a coordinate pair, `nalgebra::Vector2<f64>`.
//! - `Line`: directed line through two distinct points.
//! - `orient2d`: signed cross product, also used as a distance proxy.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Signed cross product `(b − a) × (p − a)`.
///
/// Positive when `p` is strictly left of `a→b`, negative when strictly right,
/// zero when collinear. For a fixed line the magnitude is `|a→b|` times the
/// distance of `p` to the line, so it ranks distances without a square root.
#[inline]
pub fn orient2d(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Directed line `a→b`.
///
/// Invariant: `a != b` (callers only build lines from distinct hull vertices).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        debug_assert!(a != b, "line endpoints must be distinct");
        Self { a, b }
    }

    /// Same line, opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    #[inline]
    pub fn orient(&self, p: Point) -> f64 {
        orient2d(self.a, self.b, p)
    }

    #[inline]
    pub fn side(&self, p: Point) -> Side {
        let o = self.orient(p);
        if o > 0.0 {
            Side::Left
        } else if o < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }

    #[inline]
    pub fn is_left(&self, p: Point) -> bool {
        self.orient(p) > 0.0
    }
}
