#![allow(clippy::float_cmp)]

use super::*;

fn cfg() -> AnimatorConfig {
    AnimatorConfig::default()
}

/// Run `advance` until the angle lands on `target`, returning the end angle and frame count.
fn settle(mut current: f64, target: f64, config: &AnimatorConfig) -> Option<(f64, usize)> {
    for step in 0..10_000 {
        if current == target {
            return Some((current, step));
        }
        current = advance(current, target, config);
    }
    None
}

#[test]
fn advance_moves_fraction_of_distance() {
    let next = advance(0.0, 10.0, &cfg());
    assert!((next - 0.8).abs() < 1e-12);
}

#[test]
fn advance_snaps_inside_epsilon() {
    assert_eq!(advance(9.995, 10.0, &cfg()), 10.0);
    assert_eq!(advance(-0.005, 0.0, &cfg()), 0.0);
}

#[test]
fn advance_at_target_stays_put() {
    assert_eq!(advance(3.5, 3.5, &cfg()), 3.5);
}

#[test]
fn settling_factor_applies_near_level() {
    let c = cfg();
    assert_eq!(easing_factor(4.0, 0.0, &c), c.easing_factor_settling);
    assert_eq!(easing_factor(-4.9, 0.0, &c), c.easing_factor_settling);
}

#[test]
fn default_factor_applies_elsewhere() {
    let c = cfg();
    assert_eq!(easing_factor(6.0, 0.0, &c), c.easing_factor_default);
    assert_eq!(easing_factor(1.0, 2.2, &c), c.easing_factor_default);
    assert_eq!(easing_factor(0.0, -20.0, &c), c.easing_factor_default);
}

#[test]
fn settles_exactly_on_target_from_any_start() {
    for &(start, target) in &[(42.0, 0.0), (-42.0, 0.0), (0.0, 42.0), (-30.0, 12.5), (2.2, -2.2), (0.0, 0.0)] {
        let (end, steps) = settle(start, target, &cfg()).unwrap();
        assert_eq!(end, target, "start={start} target={target}");
        assert!(steps < 500, "start={start} target={target} took {steps}");
    }
}

#[test]
fn approach_never_overshoots() {
    let c = cfg();
    let target = -17.0;
    let mut current = 35.0;
    for _ in 0..1000 {
        let next = advance(current, target, &c);
        assert!(next >= target);
        assert!(next <= current);
        current = next;
    }
    assert_eq!(current, target);
}

#[test]
fn settling_is_quicker_than_approach() {
    let c = cfg();
    let (_, to_level) = settle(4.0, 0.0, &c).unwrap();
    let (_, to_tilt) = settle(0.0, 4.0, &c).unwrap();
    assert!(to_level < to_tilt);
}
