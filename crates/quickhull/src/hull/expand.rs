use crate::geom2::{Line, Point};

/// Farthest candidate from `line`.
///
/// Exact ties lie on one parallel row; the one farthest along `a→b` wins, so
/// the pick depends on coordinates only and is always an end of the row.
fn farthest(line: &Line, candidates: &[Point]) -> Option<Point> {
    let dir = line.b - line.a;
    let mut best: Option<(Point, f64, f64)> = None;
    for &p in candidates {
        let d = line.orient(p).abs();
        let t = dir.dot(&(p - line.a));
        match best {
            Some((_, bd, bt)) if d < bd || (d == bd && t <= bt) => {}
            _ => best = Some((p, d, t)),
        }
    }
    best.map(|(p, _, _)| p)
}

/// Hull vertices strictly left of `line` (`a→b`), given the candidates on that side.
///
/// The chain is emitted in counter-clockwise order, which on the left of `a→b`
/// runs from `b` back to `a`: `expand(c→b) + [c] + expand(a→c)`. When
/// `discovery` is given, each farthest point is appended in pre-order.
pub(crate) fn expand(
    line: Line,
    candidates: Vec<Point>,
    mut discovery: Option<&mut Vec<Point>>,
) -> Vec<Point> {
    let Some(c) = farthest(&line, &candidates) else {
        return Vec::new();
    };
    if let Some(d) = discovery.as_deref_mut() {
        d.push(c);
    }

    let ac = Line::new(line.a, c);
    let cb = Line::new(c, line.b);
    let mut left_of_ac = Vec::new();
    let mut left_of_cb = Vec::new();
    // `c` itself and everything inside triangle a-c-b falls through.
    for p in candidates {
        if ac.is_left(p) {
            left_of_ac.push(p);
        } else if cb.is_left(p) {
            left_of_cb.push(p);
        }
    }

    let before = expand(ac, left_of_ac, discovery.as_deref_mut());
    let after = expand(cb, left_of_cb, discovery);

    let mut chain = after;
    chain.reserve(before.len() + 1);
    chain.push(c);
    chain.extend(before);
    chain
}
