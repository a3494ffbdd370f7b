#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn gesture_default_is_idle() {
    assert!(matches!(Gesture::default(), Gesture::Idle));
}

// --- touch_distance ---

#[test]
fn touch_distance_axis_aligned() {
    let d = touch_distance(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(d, 10.0));
}

#[test]
fn touch_distance_diagonal() {
    let d = touch_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert!(approx_eq(d, 5.0));
}

#[test]
fn touch_distance_is_symmetric() {
    let a = Point::new(-2.0, 7.0);
    let b = Point::new(5.0, -1.0);
    assert!(approx_eq(touch_distance(a, b), touch_distance(b, a)));
}

#[test]
fn touch_distance_same_point_is_zero() {
    let p = Point::new(42.0, 42.0);
    assert!(approx_eq(touch_distance(p, p), 0.0));
}
