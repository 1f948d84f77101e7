//! Torque engine: per-side weights and torques, target tilt and balance state.
//!
//! `compute_physics` is a pure function of the item list and the physics
//! config. The only stateful piece here is [`BalanceLatch`], which turns the
//! per-recompute `balanced` flag into a one-shot "balance achieved" edge.
//!
//! Items within `object_radius` of the pivot physically overlap it, so their
//! weight is split between the sides in proportion to how much of the
//! footprint lies on each. Each share acts at the centroid of its own part of
//! the footprint, i.e. at `fraction * object_radius / 2` from the pivot, which
//! keeps a straddling item's torque small.

#[cfg(test)]
#[path = "physics_test.rs"]
mod physics_test;

use crate::config::PhysicsConfig;
use crate::doc::Item;

/// Which way the plank leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Neutral,
}

impl Direction {
    /// Indicator class name handed to the render sink.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Neutral => "neutral",
        }
    }
}

/// Result of one physics recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsResult {
    pub left_weight: f64,
    pub right_weight: f64,
    pub left_torque: f64,
    pub right_torque: f64,
    /// Tilt the animator eases toward, in degrees. Positive tilts right side down.
    pub target_angle: f64,
    pub balanced: bool,
    pub direction: Direction,
}

impl PhysicsResult {
    /// `right_torque - left_torque`.
    #[must_use]
    pub fn torque_diff(&self) -> f64 {
        self.right_torque - self.left_torque
    }
}

impl Default for PhysicsResult {
    fn default() -> Self {
        Self {
            left_weight: 0.0,
            right_weight: 0.0,
            left_torque: 0.0,
            right_torque: 0.0,
            target_angle: 0.0,
            balanced: true,
            direction: Direction::Neutral,
        }
    }
}

/// Weight and torque one item contributes to each side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contribution {
    pub left_weight: f64,
    pub right_weight: f64,
    pub left_torque: f64,
    pub right_torque: f64,
}

/// Split a single item's weight and torque between the two sides.
#[must_use]
pub fn contribution(position: f64, weight: f64, object_radius: f64) -> Contribution {
    let abs_x = position.abs();
    if abs_x < object_radius {
        let ratio = (position + object_radius) / (2.0 * object_radius);
        let right_part = weight * ratio;
        let left_part = weight - right_part;
        Contribution {
            left_weight: left_part,
            right_weight: right_part,
            left_torque: left_part * ((1.0 - ratio) * object_radius / 2.0),
            right_torque: right_part * (ratio * object_radius / 2.0),
        }
    } else if position < 0.0 {
        Contribution { left_weight: weight, left_torque: weight * abs_x, ..Contribution::default() }
    } else {
        Contribution { right_weight: weight, right_torque: weight * abs_x, ..Contribution::default() }
    }
}

/// Torque as shown on the readout: rounded to whole display units.
#[must_use]
pub fn displayed_torque(torque: f64, display_unit: f64) -> f64 {
    (torque / display_unit).round()
}

/// Compute side totals, target angle and balance for a set of items.
#[must_use]
pub fn compute_physics(items: &[Item], config: &PhysicsConfig) -> PhysicsResult {
    let mut totals = Contribution::default();
    for item in items {
        let c = contribution(item.position, item.weight, config.object_radius);
        totals.left_weight += c.left_weight;
        totals.right_weight += c.right_weight;
        totals.left_torque += c.left_torque;
        totals.right_torque += c.right_torque;
    }

    let diff = totals.right_torque - totals.left_torque;
    let shown_left = displayed_torque(totals.left_torque, config.torque_display_unit);
    let shown_right = displayed_torque(totals.right_torque, config.torque_display_unit);
    let balanced = (shown_right - shown_left).abs() < 0.5;

    let target_angle = if balanced {
        0.0
    } else {
        let clamped = (diff / config.angle_scale).clamp(-config.max_angle, config.max_angle);
        if clamped.abs() < config.min_visible_angle {
            config.min_visible_angle.copysign(diff)
        } else {
            clamped
        }
    };

    let direction = if balanced {
        Direction::Neutral
    } else if diff > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    };

    PhysicsResult {
        left_weight: totals.left_weight,
        right_weight: totals.right_weight,
        left_torque: totals.left_torque,
        right_torque: totals.right_torque,
        target_angle,
        balanced,
        direction,
    }
}

/// Edge detector for the unbalanced → balanced transition.
///
/// Starts out "balanced" so an empty plank at startup does not announce itself.
#[derive(Debug, Clone, Copy)]
pub struct BalanceLatch {
    was_balanced: bool,
}

impl Default for BalanceLatch {
    fn default() -> Self {
        Self { was_balanced: true }
    }
}

impl BalanceLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest balance state. Returns true only when it just became balanced.
    pub fn observe(&mut self, balanced: bool) -> bool {
        let fired = balanced && !self.was_balanced;
        self.was_balanced = balanced;
        fired
    }

    /// Set the remembered state without firing, e.g. after hydrating saved state.
    pub fn reset_to(&mut self, balanced: bool) {
        self.was_balanced = balanced;
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.was_balanced
    }
}
