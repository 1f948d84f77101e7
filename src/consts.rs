//! Shared numeric constants for the seesaw crate.

// ── Physics ─────────────────────────────────────────────────────

/// Largest tilt, in degrees, the plank may reach in either direction.
pub const MAX_ANGLE_DEG: f64 = 42.0;

/// Divisor turning a torque difference into degrees of tilt.
pub const ANGLE_SCALE: f64 = 100.0;

/// Smallest tilt shown while the seesaw is out of balance.
pub const MIN_VISIBLE_ANGLE_DEG: f64 = 2.2;

/// Half-width of a placed weight's footprint on the plank.
pub const OBJECT_RADIUS: f64 = 12.0;

/// Torque readouts are shown in multiples of this unit.
pub const TORQUE_DISPLAY_UNIT: f64 = 100.0;

/// Lightest weight the roller may produce.
pub const WEIGHT_MIN: f64 = 1.0;

/// Heaviest weight the roller may produce.
pub const WEIGHT_MAX: f64 = 10.0;

/// Distance from the pivot to either end of the plank.
pub const HALF_PLANK_LENGTH: f64 = 250.0;

// ── Animation ───────────────────────────────────────────────────

/// Per-frame easing factor while approaching a tilted target.
pub const EASING_FACTOR_DEFAULT: f64 = 0.08;

/// Per-frame easing factor while settling back to level.
pub const EASING_FACTOR_SETTLING: f64 = 0.15;

/// Within this many degrees of level the settling factor applies.
pub const SETTLE_WINDOW_DEG: f64 = 5.0;

/// Remaining distance below which the animator snaps to its target.
pub const SNAP_EPSILON_DEG: f64 = 0.01;

/// Frame cadence of the headless runner, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ── Input ───────────────────────────────────────────────────────

/// Hold duration that turns a touch press on an item into a removal.
pub const LONG_PRESS_DELAY_MS: f64 = 500.0;

/// Pointer travel, in screen pixels, that cancels a pending long press.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// Half the height of the plank's clickable band, in plank-local pixels.
pub const PLANK_HIT_HALF_HEIGHT: f64 = 12.0;

// ── Item visuals ────────────────────────────────────────────────

/// Diameter of a weight-zero item.
pub const ITEM_BASE_SIZE: f64 = 26.0;

/// Diameter added per unit of weight.
pub const ITEM_SIZE_PER_WEIGHT: f64 = 2.6;

/// Fraction of an item's size that sits above the plank's centre line.
pub const ITEM_RAISE_RATIO: f64 = 0.75;

/// Label font size relative to the item's size.
pub const ITEM_FONT_RATIO: f64 = 0.28;

/// Smallest label font size.
pub const ITEM_FONT_MIN: f64 = 12.0;
