//! Front-end state: the loaded points and the last computed hull.
//!
//! Commands receive a `Session` explicitly; the library never sees it.

use quickhull::api::{
    compute_convex_hull_traced, onion_layers, HullBoundary, HullTrace, InvalidInputError, Point,
    PointSet,
};
use serde::Serialize;

use crate::points_io::to_pairs;

#[derive(Debug, Default)]
pub struct Session {
    points: Vec<Point>,
    trace: Option<HullTrace>,
}

/// JSON body written by `hull`.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
    pub discovery: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Vec<[f64; 2]>>>,
}

/// JSON body written by `layers`.
#[derive(Debug, Serialize)]
pub struct LayersReport {
    pub points: usize,
    pub layers: Vec<Vec<[f64; 2]>>,
}

impl Session {
    /// Validate raw rows and keep the distinct points.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        Ok(Self::from_points(PointSet::from_rows(rows)?.into_vec()))
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            trace: None,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Add points (clicks, in an interactive front-end); returns how many were new.
    ///
    /// The batch is validated as a whole, so an error index counts within `extra`
    /// and leaves the session untouched. Points already present are skipped and
    /// the cached hull is dropped only when something was added.
    pub fn add_points(&mut self, extra: &[Point]) -> Result<usize, InvalidInputError> {
        let batch = PointSet::from_points(extra)?;
        let known = PointSet::from_points(&self.points)?;
        let before = self.points.len();
        let fresh = batch.iter().copied().filter(|p| !known.contains(*p));
        self.points.extend(fresh);
        let added = self.points.len() - before;
        if added > 0 {
            self.trace = None;
        }
        Ok(added)
    }

    /// Hull of the current points, computed once per change.
    pub fn trace(&mut self) -> Result<&HullTrace, InvalidInputError> {
        if self.trace.is_none() {
            self.trace = Some(compute_convex_hull_traced(&self.points)?);
        }
        Ok(self.trace.get_or_insert_with(HullTrace::default))
    }

    pub fn hull_report(&mut self, with_steps: bool) -> Result<HullReport, InvalidInputError> {
        let points = self.points.len();
        let trace = self.trace()?;
        let steps = with_steps.then(|| {
            trace
                .steps()
                .iter()
                .map(|s| to_pairs(s.vertices()))
                .collect()
        });
        Ok(HullReport {
            points,
            hull: to_pairs(trace.hull.vertices()),
            discovery: to_pairs(&trace.discovery),
            area: trace.hull.area(),
            perimeter: trace.hull.perimeter(),
            steps,
        })
    }

    pub fn layers(&self) -> Result<Vec<HullBoundary>, InvalidInputError> {
        onion_layers(&self.points)
    }

    pub fn layers_report(&self) -> Result<LayersReport, InvalidInputError> {
        Ok(LayersReport {
            points: self.points.len(),
            layers: self
                .layers()?
                .iter()
                .map(|l| to_pairs(l.vertices()))
                .collect(),
        })
    }
}
