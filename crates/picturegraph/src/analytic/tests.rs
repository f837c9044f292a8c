use super::*;
use nalgebra::vector;
use std::collections::HashSet;

#[test]
fn line_through_two_points_is_canonical() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(2.0, 1.0);
    let c = Point::new(4.0, 2.0);
    let l1 = Line::through(a, b).unwrap();
    let l2 = Line::through(c, a).unwrap();
    let l3 = Line::through(b, c).unwrap();
    assert_eq!(l1, l2);
    assert_eq!(l2, l3);
    assert!((l1.n.norm() - 1.0).abs() < 1e-12);
    let set: HashSet<AnalyticObject> = [l1, l2, l3].into_iter().map(Into::into).collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn vertical_and_horizontal_lines_compare_equal_regardless_of_orientation() {
    let up = Line::through(Point::new(1.0, 0.0), Point::new(1.0, 5.0)).unwrap();
    let down = Line::through(Point::new(1.0, 3.0), Point::new(1.0, -2.0)).unwrap();
    assert_eq!(up, down);
    let right = Line::through(Point::new(0.0, 2.0), Point::new(3.0, 2.0)).unwrap();
    let left = Line::through(Point::new(7.0, 2.0), Point::new(-1.0, 2.0)).unwrap();
    assert_eq!(right, left);
}

#[test]
fn line_through_equal_points_fails() {
    let p = Point::new(0.3, 0.7);
    let q = Point::new(0.3 + 1e-9, 0.7);
    assert!(Line::through(p, q).is_none());
}

#[test]
fn collinearity_and_lies_on() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 1.0);
    let c = Point::new(3.0, 3.0);
    let d = Point::new(3.0, 3.1);
    assert!(are_collinear(&[a, b, c]));
    assert!(!are_collinear(&[a, b, d]));
    let line: AnalyticObject = Line::through(a, b).unwrap().into();
    assert_eq!(lies_on(&line, c), Some(true));
    assert_eq!(lies_on(&line, d), Some(false));
    assert_eq!(lies_on(&AnalyticObject::Point(a), a), None);
}

#[test]
fn circumcircle_contains_its_points() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let c = Point::new(0.3, 0.8);
    let circle = Circle::through(a, b, c).unwrap();
    for p in [a, b, c] {
        assert!(circle.contains(p));
    }
    assert_eq!(Circle::through(c, a, b).unwrap(), circle);
    assert!(Circle::through(a, b, Point::new(2.0, 0.0)).is_none());
    assert!(Circle::through(a, a, c).is_none());
}

#[test]
fn intersection_and_projection() {
    let x_axis = Line::through(Point::new(0.0, 0.0), Point::new(1.0, 0.0)).unwrap();
    let diag = Line::through(Point::new(0.0, -1.0), Point::new(1.0, 0.0)).unwrap();
    let p = x_axis.intersection_with(&diag).unwrap();
    assert_eq!(p, Point::new(1.0, 0.0));
    let parallel = Line::through_with_direction(Point::new(0.0, 2.0), vector![5.0, 0.0]).unwrap();
    assert!(x_axis.is_parallel_to(&parallel));
    assert!(x_axis.intersection_with(&parallel).is_none());
    assert_eq!(x_axis.project(Point::new(0.4, 3.0)), Point::new(0.4, 0.0));
}

#[test]
fn rounding_collapses_noise_and_signed_zero() {
    let p = Point::new(0.1 + 0.2, -0.0);
    let q = Point::new(0.3, 0.0);
    assert_eq!(p, q);
    assert_ne!(p, Point::new(0.3 + 1e-4, 0.0));
}
