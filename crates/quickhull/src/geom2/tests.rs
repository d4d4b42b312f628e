use super::*;
use crate::error::InvalidInputError;
use nalgebra::vector;

#[test]
fn orientation_sign_and_magnitude() {
    let a = vector![0.0, 0.0];
    let b = vector![2.0, 0.0];
    // left, right, on
    assert!(orient2d(a, b, vector![1.0, 1.0]) > 0.0);
    assert!(orient2d(a, b, vector![1.0, -1.0]) < 0.0);
    assert_eq!(orient2d(a, b, vector![5.0, 0.0]), 0.0);
    // magnitude is |ab| * distance
    assert_eq!(orient2d(a, b, vector![0.3, 3.0]), 6.0);
    assert!(orient2d(a, b, vector![7.0, 3.0]).abs() > orient2d(a, b, vector![-1.0, 2.0]).abs());
}

#[test]
fn line_sides_flip_when_reversed() {
    let l = Line::new(vector![0.0, 0.0], vector![1.0, 1.0]);
    let p = vector![0.0, 1.0];
    assert_eq!(l.side(p), Side::Left);
    assert_eq!(l.reversed().side(p), Side::Right);
    assert_eq!(l.side(vector![3.0, 3.0]), Side::On);
    assert!(l.is_left(p));
    assert!(!l.reversed().is_left(p));
}

#[test]
fn point_set_drops_exact_duplicates_keeping_first_order() {
    let pts = vec![
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, -0.0],
        vector![2.0, 0.5],
    ];
    let set = PointSet::from_points(&pts).unwrap();
    assert_eq!(
        set.as_slice(),
        &[vector![1.0, 1.0], vector![0.0, 0.0], vector![2.0, 0.5]]
    );
    assert!(!set.is_degenerate());
    assert!(set.contains(vector![2.0, 0.5]));
    assert!(!set.contains(vector![2.0, 0.6]));
}

#[test]
fn point_set_rejects_non_finite() {
    let pts = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0]];
    assert_eq!(
        PointSet::from_points(&pts),
        Err(InvalidInputError::NonFinite { index: 1 })
    );
    let pts = vec![vector![f64::INFINITY, 0.0]];
    assert_eq!(
        PointSet::from_points(&pts),
        Err(InvalidInputError::NonFinite { index: 0 })
    );
}

#[test]
fn point_set_rows_check_arity_first() {
    let rows: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 2.0, 3.0], vec![f64::NAN, 0.0]];
    assert_eq!(
        PointSet::from_rows(&rows),
        Err(InvalidInputError::WrongArity { index: 1, arity: 3 })
    );
    let rows: Vec<Vec<f64>> = vec![vec![]];
    assert_eq!(
        PointSet::from_rows(&rows),
        Err(InvalidInputError::WrongArity { index: 0, arity: 0 })
    );
    let rows = [[0.0, 0.0], [0.0, 0.0], [1.0, 1.0]];
    let set = PointSet::from_rows(&rows).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.is_degenerate());
}

#[test]
fn extremes_break_ties_on_y() {
    let pts = vec![
        vector![0.0, 3.0],
        vector![0.0, -1.0],
        vector![4.0, 0.0],
        vector![4.0, 2.0],
        vector![2.0, 9.0],
    ];
    let set = PointSet::from_points(&pts).unwrap();
    let (l, r) = find_extremes(&set).unwrap();
    assert_eq!(l, vector![0.0, -1.0]);
    assert_eq!(r, vector![4.0, 2.0]);
}

#[test]
fn extremes_on_vertical_line_are_distinct() {
    let pts = vec![vector![1.0, 5.0], vector![1.0, -2.0], vector![1.0, 0.0]];
    let set = PointSet::from_points(&pts).unwrap();
    let (l, r) = find_extremes(&set).unwrap();
    assert_eq!(l, vector![1.0, -2.0]);
    assert_eq!(r, vector![1.0, 5.0]);
    assert!(find_extremes(&PointSet::default()).is_none());
}
