use super::assemble::{assemble, HullBoundary};
use crate::error::InvalidInputError;
use crate::geom2::{Point, PointSet};

/// Onion decomposition: hull, remove its vertices, repeat until nothing is left.
///
/// Layers are listed outermost first. After deduplication every input point is
/// a vertex of exactly one layer. Points lying on an edge of a layer are not
/// vertices of it and move on to a later layer.
pub fn onion_layers(points: &[Point]) -> Result<Vec<HullBoundary>, InvalidInputError> {
    let mut remaining = PointSet::from_points(points)?.into_vec();
    let mut layers = Vec::new();
    while !remaining.is_empty() {
        let hull = assemble(PointSet::from_finite(remaining.iter().copied()), None);
        // a non-empty set always has a non-empty hull, so this loop shrinks
        remaining.retain(|p| !hull.vertices().contains(p));
        layers.push(hull);
    }
    Ok(layers)
}
