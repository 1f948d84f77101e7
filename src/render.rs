//! Scene description handed to the render sink.
//!
//! The core never draws. After a change it builds a [`Scene`] (plank
//! rotation, one positioned element per item, indicator classes and readout
//! strings) and the host passes it to whatever [`RenderSink`] it owns.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tracing::trace;

use crate::consts::{ITEM_FONT_MIN, ITEM_FONT_RATIO, ITEM_RAISE_RATIO};
use crate::doc::{Item, ItemId};
use crate::engine::EngineCore;
use crate::physics::{self, PhysicsResult};

/// One drawn item, in plank-local pixels from the plank's left end.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub id: ItemId,
    /// Horizontal centre measured from the plank's left end.
    pub left: f64,
    /// Top edge relative to the plank's centre line (negative is above).
    pub top: f64,
    /// Diameter.
    pub size: f64,
    pub font_size: f64,
    /// Text drawn on the item.
    pub label: String,
    /// Hover text.
    pub title: String,
    /// The item is under an active press or drag.
    pub active: bool,
}

impl RenderItem {
    #[must_use]
    pub fn from_item(item: &Item, half_plank_length: f64, active: bool) -> Self {
        let size = item.visual_size();
        Self {
            id: item.id,
            left: half_plank_length + item.position,
            top: -size * ITEM_RAISE_RATIO,
            size,
            font_size: (size * ITEM_FONT_RATIO).max(ITEM_FONT_MIN),
            label: format!("{}", item.weight),
            title: format!("{} kg", item.weight),
            active,
        }
    }
}

/// Text readouts shown beside the seesaw.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub left_weight: String,
    pub right_weight: String,
    pub left_torque: String,
    pub right_torque: String,
    pub tilt: String,
    pub next_weight: String,
}

impl Readouts {
    #[must_use]
    pub fn new(result: &PhysicsResult, current_angle: f64, next_weight: Option<f64>, torque_unit: f64) -> Self {
        Self {
            left_weight: format!("{:.1} kg", result.left_weight),
            right_weight: format!("{:.1} kg", result.right_weight),
            left_torque: format!("{}", physics::displayed_torque(result.left_torque, torque_unit)),
            right_torque: format!("{}", physics::displayed_torque(result.right_torque, torque_unit)),
            tilt: format!("{current_angle:.1}°"),
            next_weight: next_weight.map_or_else(|| "-- kg".to_string(), |w| format!("{w} kg")),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Plank rotation in degrees, clockwise.
    pub plank_rotation: f64,
    pub items: Vec<RenderItem>,
    /// `"balanced"` or `"unbalanced"`.
    pub balance_class: &'static str,
    /// `"left"`, `"right"` or `"neutral"`.
    pub direction_class: &'static str,
    pub readouts: Readouts,
}

impl Scene {
    /// Describe the engine's current state.
    #[must_use]
    pub fn from_core(core: &EngineCore) -> Self {
        let cfg = core.config().physics;
        let result = core.physics();
        let active = core.input_state().active_item();
        Self {
            plank_rotation: core.current_angle(),
            items: core
                .items()
                .iter()
                .map(|item| RenderItem::from_item(item, cfg.half_plank_length, active == Some(item.id)))
                .collect(),
            balance_class: if result.balanced { "balanced" } else { "unbalanced" },
            direction_class: result.direction.class_name(),
            readouts: Readouts::new(result, core.current_angle(), core.next_weight(), cfg.torque_display_unit),
        }
    }
}

/// Consumer of scenes.
pub trait RenderSink {
    fn render(&mut self, scene: &Scene);
}

/// Render sink for headless runs: traces each scene.
#[derive(Debug, Default)]
pub struct LogRenderSink;

impl RenderSink for LogRenderSink {
    fn render(&mut self, scene: &Scene) {
        trace!(
            rotation = scene.plank_rotation,
            items = scene.items.len(),
            balance = scene.balance_class,
            direction = scene.direction_class,
            left = %scene.readouts.left_torque,
            right = %scene.readouts.right_torque,
            "scene"
        );
    }
}
