//! Simulation tunables, with defaults and `SEESAW_*` environment overrides.
//!
//! The tunables are split by the component that consumes them so each pure
//! function takes only what it needs: [`PhysicsConfig`] for the torque engine,
//! [`AnimatorConfig`] for the angle easing step and [`InputConfig`] for the
//! gesture state machine. [`SimConfig`] bundles the three.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts;

/// Error returned by [`SimConfig::from_env`] and [`SimConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// An environment variable was set but did not parse as a number.
    #[error("{var} is not a number: {value:?}")]
    NotANumber { var: String, value: String },
    /// A value is outside the range its consumer can work with.
    #[error("invalid {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

/// Tunables for [`crate::physics::compute_physics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Tilt limit in degrees.
    pub max_angle: f64,
    /// Torque difference per degree of tilt.
    pub angle_scale: f64,
    /// Smallest tilt shown while unbalanced.
    pub min_visible_angle: f64,
    /// Half-width of an item's footprint; items closer than this straddle the pivot.
    pub object_radius: f64,
    /// Unit the torque readouts are rounded to; balance is judged on those readouts.
    pub torque_display_unit: f64,
    /// Lightest allowed weight.
    pub weight_min: f64,
    /// Heaviest allowed weight.
    pub weight_max: f64,
    /// Distance from the pivot to either plank end.
    pub half_plank_length: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_angle: consts::MAX_ANGLE_DEG,
            angle_scale: consts::ANGLE_SCALE,
            min_visible_angle: consts::MIN_VISIBLE_ANGLE_DEG,
            object_radius: consts::OBJECT_RADIUS,
            torque_display_unit: consts::TORQUE_DISPLAY_UNIT,
            weight_min: consts::WEIGHT_MIN,
            weight_max: consts::WEIGHT_MAX,
            half_plank_length: consts::HALF_PLANK_LENGTH,
        }
    }
}

impl PhysicsConfig {
    /// Whether `weight` lies inside the configured weight range.
    #[must_use]
    pub fn weight_in_range(&self, weight: f64) -> bool {
        weight.is_finite() && weight >= self.weight_min && weight <= self.weight_max
    }
}

/// Tunables for [`crate::animator::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    pub easing_factor_default: f64,
    pub easing_factor_settling: f64,
    pub settle_window_deg: f64,
    pub snap_epsilon: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            easing_factor_default: consts::EASING_FACTOR_DEFAULT,
            easing_factor_settling: consts::EASING_FACTOR_SETTLING,
            settle_window_deg: consts::SETTLE_WINDOW_DEG,
            snap_epsilon: consts::SNAP_EPSILON_DEG,
        }
    }
}

/// Tunables for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfig {
    pub long_press_delay_ms: f64,
    pub drag_threshold_px: f64,
    pub plank_hit_half_height: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            long_press_delay_ms: consts::LONG_PRESS_DELAY_MS,
            drag_threshold_px: consts::DRAG_THRESHOLD_PX,
            plank_hit_half_height: consts::PLANK_HIT_HALF_HEIGHT,
        }
    }
}

/// Every tunable the simulation core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub animator: AnimatorConfig,
    pub input: InputConfig,
}

impl SimConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Recognized (all optional, all numeric):
    /// - `SEESAW_MAX_ANGLE`, `SEESAW_ANGLE_SCALE`, `SEESAW_MIN_VISIBLE_ANGLE`
    /// - `SEESAW_OBJECT_RADIUS`, `SEESAW_TORQUE_DISPLAY_UNIT`
    /// - `SEESAW_WEIGHT_MIN`, `SEESAW_WEIGHT_MAX`, `SEESAW_HALF_PLANK_LENGTH`
    /// - `SEESAW_EASING_DEFAULT`, `SEESAW_EASING_SETTLING`
    /// - `SEESAW_LONG_PRESS_MS`, `SEESAW_DRAG_THRESHOLD_PX`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: f64| parse_f64(key, lookup(key), default);

        let physics = PhysicsConfig {
            max_angle: read("SEESAW_MAX_ANGLE", defaults.physics.max_angle)?,
            angle_scale: read("SEESAW_ANGLE_SCALE", defaults.physics.angle_scale)?,
            min_visible_angle: read("SEESAW_MIN_VISIBLE_ANGLE", defaults.physics.min_visible_angle)?,
            object_radius: read("SEESAW_OBJECT_RADIUS", defaults.physics.object_radius)?,
            torque_display_unit: read("SEESAW_TORQUE_DISPLAY_UNIT", defaults.physics.torque_display_unit)?,
            weight_min: read("SEESAW_WEIGHT_MIN", defaults.physics.weight_min)?,
            weight_max: read("SEESAW_WEIGHT_MAX", defaults.physics.weight_max)?,
            half_plank_length: read("SEESAW_HALF_PLANK_LENGTH", defaults.physics.half_plank_length)?,
        };
        let animator = AnimatorConfig {
            easing_factor_default: read("SEESAW_EASING_DEFAULT", defaults.animator.easing_factor_default)?,
            easing_factor_settling: read("SEESAW_EASING_SETTLING", defaults.animator.easing_factor_settling)?,
            ..defaults.animator
        };
        let input = InputConfig {
            long_press_delay_ms: read("SEESAW_LONG_PRESS_MS", defaults.input.long_press_delay_ms)?,
            drag_threshold_px: read("SEESAW_DRAG_THRESHOLD_PX", defaults.input.drag_threshold_px)?,
            ..defaults.input
        };

        let config = Self { physics, animator, input };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the core cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        positive("max_angle", p.max_angle)?;
        positive("angle_scale", p.angle_scale)?;
        positive("torque_display_unit", p.torque_display_unit)?;
        positive("half_plank_length", p.half_plank_length)?;
        positive("weight_min", p.weight_min)?;
        non_negative("object_radius", p.object_radius)?;
        non_negative("min_visible_angle", p.min_visible_angle)?;
        if p.weight_max < p.weight_min {
            return Err(ConfigError::OutOfRange {
                field: "weight_max",
                reason: format!("{} is below weight_min {}", p.weight_max, p.weight_min),
            });
        }
        if p.min_visible_angle > p.max_angle {
            return Err(ConfigError::OutOfRange {
                field: "min_visible_angle",
                reason: format!("{} exceeds max_angle {}", p.min_visible_angle, p.max_angle),
            });
        }

        let a = &self.animator;
        unit_interval("easing_factor_default", a.easing_factor_default)?;
        unit_interval("easing_factor_settling", a.easing_factor_settling)?;
        positive("snap_epsilon", a.snap_epsilon)?;

        non_negative("long_press_delay_ms", self.input.long_press_delay_ms)?;
        non_negative("drag_threshold_px", self.input.drag_threshold_px)?;
        Ok(())
    }
}

fn parse_f64(key: &str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConfigError::NotANumber { var: key.to_string(), value: raw }),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, reason: format!("{value} must be greater than zero") })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, reason: format!("{value} must not be negative") })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, reason: format!("{value} must be in (0, 1]") })
    }
}
