#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::ItemId;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn item(id: u64, position: f64, weight: f64) -> Item {
    Item { id: ItemId(id), position, weight }
}

fn config_with_radius(object_radius: f64) -> PhysicsConfig {
    PhysicsConfig { object_radius, ..PhysicsConfig::default() }
}

// =============================================================
// contribution
// =============================================================

#[test]
fn off_pivot_right_goes_entirely_right() {
    let c = contribution(80.0, 3.0, 12.0);
    assert_eq!(c.right_weight, 3.0);
    assert_eq!(c.right_torque, 240.0);
    assert_eq!(c.left_weight, 0.0);
    assert_eq!(c.left_torque, 0.0);
}

#[test]
fn off_pivot_left_goes_entirely_left() {
    let c = contribution(-40.0, 7.0, 12.0);
    assert_eq!(c.left_weight, 7.0);
    assert_eq!(c.left_torque, 280.0);
    assert_eq!(c.right_weight, 0.0);
    assert_eq!(c.right_torque, 0.0);
}

#[test]
fn exactly_at_radius_does_not_straddle() {
    let c = contribution(12.0, 2.0, 12.0);
    assert_eq!(c.right_weight, 2.0);
    assert_eq!(c.right_torque, 24.0);
    assert_eq!(c.left_weight, 0.0);
}

#[test]
fn centred_item_splits_evenly() {
    let c = contribution(0.0, 8.0, 12.0);
    assert!(approx_eq(c.left_weight, 4.0));
    assert!(approx_eq(c.right_weight, 4.0));
    // Each half acts at half its footprint fraction: 0.5 * 12 / 2 = 3.
    assert!(approx_eq(c.left_torque, 12.0));
    assert!(approx_eq(c.right_torque, 12.0));
}

#[test]
fn straddling_parts_sum_to_weight() {
    for &(x, w) in &[(-11.9, 10.0), (-3.0, 1.0), (0.1, 7.0), (5.0, 4.0), (11.99, 9.0)] {
        let c = contribution(x, w, 12.0);
        assert!(approx_eq(c.left_weight + c.right_weight, w), "x={x} w={w}");
    }
}

#[test]
fn straddling_lever_arms_stay_within_half_radius() {
    for &x in &[-11.0, -6.0, 2.0, 9.0, 11.5] {
        let c = contribution(x, 5.0, 12.0);
        assert!(c.left_torque <= c.left_weight * 6.0 + EPSILON, "x={x}");
        assert!(c.right_torque <= c.right_weight * 6.0 + EPSILON, "x={x}");
    }
}

// =============================================================
// compute_physics: baseline properties
// =============================================================

#[test]
fn empty_plank_is_level_and_balanced() {
    let r = compute_physics(&[], &PhysicsConfig::default());
    assert_eq!(r.left_weight, 0.0);
    assert_eq!(r.right_weight, 0.0);
    assert_eq!(r.target_angle, 0.0);
    assert!(r.balanced);
    assert_eq!(r.direction, Direction::Neutral);
    assert_eq!(r, PhysicsResult::default());
}

#[test]
fn recompute_is_idempotent() {
    let items = [item(0, -70.0, 3.0), item(1, 4.0, 9.0), item(2, 200.0, 2.0)];
    let cfg = PhysicsConfig::default();
    assert_eq!(compute_physics(&items, &cfg), compute_physics(&items, &cfg));
}

#[test]
fn mirrored_item_mirrors_result() {
    let cfg = config_with_radius(11.0);
    for &(p, w) in &[(60.0, 5.0), (7.0, 3.0), (200.0, 10.0), (0.5, 1.0)] {
        let right = compute_physics(&[item(0, p, w)], &cfg);
        let left = compute_physics(&[item(0, -p, w)], &cfg);
        assert!(approx_eq(right.left_weight, left.right_weight), "p={p}");
        assert!(approx_eq(right.right_weight, left.left_weight), "p={p}");
        assert!(approx_eq(right.left_torque, left.right_torque), "p={p}");
        assert!(approx_eq(right.right_torque, left.left_torque), "p={p}");
        assert!(approx_eq(right.target_angle, -left.target_angle), "p={p}");
        assert_eq!(right.balanced, left.balanced);
    }
}

#[test]
fn large_imbalance_clamps_to_max_angle() {
    let cfg = PhysicsConfig::default();
    let r = compute_physics(&[item(0, 250.0, 10.0), item(1, 240.0, 10.0)], &cfg);
    assert_eq!(r.target_angle, cfg.max_angle);
    let l = compute_physics(&[item(0, -250.0, 10.0), item(1, -240.0, 10.0)], &cfg);
    assert_eq!(l.target_angle, -cfg.max_angle);
}

#[test]
fn mid_range_angle_is_linear() {
    let cfg = PhysicsConfig::default();
    // 10 * 200 = 2000 torque on the right → 20°.
    let r = compute_physics(&[item(0, 200.0, 10.0)], &cfg);
    assert!(approx_eq(r.target_angle, 20.0));
    assert_eq!(r.direction, Direction::Right);
}

#[test]
fn small_imbalance_snaps_to_min_visible_angle() {
    let cfg = PhysicsConfig::default();
    // right 1 * 160 = 160 (shows 2), left 1 * 40 = 40 (shows 0) → diff 120 → raw 1.2°.
    let r = compute_physics(&[item(0, 160.0, 1.0), item(1, -40.0, 1.0)], &cfg);
    assert!(!r.balanced);
    assert_eq!(r.target_angle, cfg.min_visible_angle);

    let l = compute_physics(&[item(0, -160.0, 1.0), item(1, 40.0, 1.0)], &cfg);
    assert_eq!(l.target_angle, -cfg.min_visible_angle);
    assert_eq!(l.direction, Direction::Left);
}

#[test]
fn balance_uses_displayed_torque() {
    let cfg = PhysicsConfig::default();
    // 5 * 61 = 305 and 5 * 60 = 300: both show as 3.
    let r = compute_physics(&[item(0, 61.0, 5.0), item(1, -60.0, 5.0)], &cfg);
    assert!(r.torque_diff() > 0.0);
    assert!(r.balanced);
    assert_eq!(r.target_angle, 0.0);
    assert_eq!(r.direction, Direction::Neutral);
}

#[test]
fn displayed_torque_rounds_half_up() {
    assert_eq!(displayed_torque(250.0, 100.0), 3.0);
    assert_eq!(displayed_torque(249.9, 100.0), 2.0);
    assert_eq!(displayed_torque(0.0, 100.0), 0.0);
}

#[test]
fn weights_accumulate_per_side() {
    let cfg = config_with_radius(11.0);
    let r = compute_physics(&[item(0, -100.0, 4.0), item(1, 50.0, 6.0), item(2, 80.0, 1.0)], &cfg);
    assert_eq!(r.left_weight, 4.0);
    assert_eq!(r.right_weight, 7.0);
    assert_eq!(r.left_torque, 400.0);
    assert_eq!(r.right_torque, 380.0);
}

#[test]
fn direction_class_names() {
    assert_eq!(Direction::Left.class_name(), "left");
    assert_eq!(Direction::Right.class_name(), "right");
    assert_eq!(Direction::Neutral.class_name(), "neutral");
}

// =============================================================
// BalanceLatch
// =============================================================

#[test]
fn latch_starts_balanced_and_stays_quiet() {
    let mut latch = BalanceLatch::new();
    assert!(latch.is_balanced());
    assert!(!latch.observe(true));
}

#[test]
fn latch_fires_once_per_transition() {
    let mut latch = BalanceLatch::new();
    assert!(!latch.observe(false));
    assert!(latch.observe(true));
    assert!(!latch.observe(true));
    assert!(!latch.observe(true));
    assert!(!latch.observe(false));
    assert!(latch.observe(true));
}

#[test]
fn latch_reset_to_does_not_fire() {
    let mut latch = BalanceLatch::new();
    latch.reset_to(false);
    assert!(!latch.is_balanced());
    latch.reset_to(true);
    assert!(!latch.observe(true));
}
