//! Frame-based easing of the displayed plank angle toward its target.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use crate::config::AnimatorConfig;

/// Easing factor for one step: quicker when returning to level from a small tilt.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn easing_factor(current: f64, target: f64, config: &AnimatorConfig) -> f64 {
    if target == 0.0 && current.abs() < config.settle_window_deg {
        config.easing_factor_settling
    } else {
        config.easing_factor_default
    }
}

/// Advance the displayed angle by one frame.
///
/// Moves a fixed fraction of the remaining distance, and snaps exactly onto
/// `target` once within `snap_epsilon`.
#[must_use]
pub fn advance(current: f64, target: f64, config: &AnimatorConfig) -> f64 {
    let delta = target - current;
    if delta.abs() > config.snap_epsilon {
        current + delta * easing_factor(current, target, config)
    } else {
        target
    }
}
