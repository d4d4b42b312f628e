//! Input validation errors.
//!
//! Degenerate geometry (fewer than three distinct points, collinear sets) is
//! never an error; only malformed coordinates are.

use std::fmt;

/// Errors surfaced when raw input cannot be read as planar points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Row `index` does not have exactly two coordinates.
    WrongArity { index: usize, arity: usize },
    /// Row `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
}

impl InvalidInputError {
    /// Index of the offending input row.
    pub fn index(&self) -> usize {
        match *self {
            InvalidInputError::WrongArity { index, .. } => index,
            InvalidInputError::NonFinite { index } => index,
        }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::WrongArity { index, arity } => write!(
                f,
                "point {} has {} coordinates (expected exactly 2)",
                index, arity
            ),
            InvalidInputError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}
