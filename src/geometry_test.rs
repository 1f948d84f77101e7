#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0));
}

// --- to_plank_local ---

#[test]
fn level_plank_is_plain_offset() {
    let local = to_plank_local(Point::new(130.0, 95.0), Point::new(100.0, 100.0), 0.0);
    assert!(point_approx_eq(local, Point::new(30.0, -5.0)));
}

#[test]
fn quarter_turn_maps_down_to_along_plank() {
    // Plank rotated 90° clockwise: its right end points down the screen.
    let local = to_plank_local(Point::new(0.0, 50.0), Point::new(0.0, 0.0), 90.0);
    assert!(point_approx_eq(local, Point::new(50.0, 0.0)));
}

#[test]
fn tilted_plank_point_on_plank_has_zero_across() {
    let angle = 20.0_f64;
    let (sin, cos) = angle.to_radians().sin_cos();
    // A point 80 units along a plank rotated by `angle`.
    let screen = Point::new(80.0 * cos, 80.0 * sin);
    let local = to_plank_local(screen, Point::new(0.0, 0.0), angle);
    assert!(point_approx_eq(local, Point::new(80.0, 0.0)));
}

#[test]
fn negative_tilt_inverts() {
    let angle = -15.0_f64;
    let (sin, cos) = angle.to_radians().sin_cos();
    let screen = Point::new(10.0 - 60.0 * cos, 10.0 - 60.0 * sin);
    let local = to_plank_local(screen, Point::new(10.0, 10.0), angle);
    assert!(point_approx_eq(local, Point::new(-60.0, 0.0)));
}

// --- local_position ---

#[test]
fn local_position_within_bounds_is_unclamped() {
    let x = local_position(Point::new(140.0, 200.0), Point::new(200.0, 200.0), 0.0, 250.0);
    assert!(approx_eq(x, -60.0));
}

#[test]
fn local_position_clamps_right() {
    let x = local_position(Point::new(900.0, 0.0), Point::new(0.0, 0.0), 0.0, 250.0);
    assert_eq!(x, 250.0);
}

#[test]
fn local_position_clamps_left() {
    let x = local_position(Point::new(-900.0, 0.0), Point::new(0.0, 0.0), 0.0, 250.0);
    assert_eq!(x, -250.0);
}

#[test]
fn local_position_ignores_vertical_offset_on_level_plank() {
    let a = local_position(Point::new(40.0, -30.0), Point::new(0.0, 0.0), 0.0, 250.0);
    let b = local_position(Point::new(40.0, 30.0), Point::new(0.0, 0.0), 0.0, 250.0);
    assert!(approx_eq(a, b));
}

#[test]
fn clamp_position_passes_inner_values() {
    assert_eq!(clamp_position(12.5, 100.0), 12.5);
    assert_eq!(clamp_position(-100.0, 100.0), -100.0);
}
