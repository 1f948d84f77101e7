use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::animator;
use crate::config::SimConfig;
use crate::doc::{Item, ItemId, ItemStore};
use crate::geometry::{self, Point};
use crate::hit::{self, HitTarget};
use crate::input::{Gesture, GestureKind, InputState, PointerKind};
use crate::persist::{self, Snapshot};
use crate::physics::{self, BalanceLatch, PhysicsResult};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Discrete cue for the sound sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Added,
    Removed,
    BalanceAchieved,
}

impl SoundEvent {
    /// Stable event name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::BalanceAchieved => "balance-achieved",
        }
    }
}

/// Actions returned from input and frame handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemAdded(Item),
    ItemMoved { id: ItemId, position: f64 },
    ItemRemoved { id: ItemId },
    ItemsCleared,
    Sound(SoundEvent),
    PersistRequested,
    RenderNeeded,
}

/// Simulation state and the interaction state machine driving it.
///
/// Every mutation of the item set goes through a method here that also
/// recomputes physics before returning, so `target_angle` can never lag the
/// items it is derived from.
pub struct EngineCore {
    config: SimConfig,
    items: ItemStore,
    physics: PhysicsResult,
    latch: BalanceLatch,
    current_angle: f64,
    next_weight: Option<f64>,
    input: InputState,
    pivot: Point,
    rng: StdRng,
}

impl EngineCore {
    /// Create an empty simulation with an OS-seeded weight roller.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an empty simulation with a deterministic weight roller.
    #[must_use]
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimConfig, rng: StdRng) -> Self {
        let mut core = Self {
            config,
            items: ItemStore::new(),
            physics: PhysicsResult::default(),
            latch: BalanceLatch::new(),
            current_angle: 0.0,
            next_weight: None,
            input: InputState::Idle,
            pivot: Point::new(0.0, 0.0),
            rng,
        };
        core.next_weight = Some(core.roll_weight());
        core
    }

    // --- Persistence ---

    /// Hydrate from a saved snapshot.
    ///
    /// Out-of-range entries are dropped or clamped, the displayed angle snaps
    /// straight to the recomputed target, and the balance latch is primed so
    /// loading an already balanced plank stays quiet.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Vec<Action> {
        let restored = persist::sanitize(snapshot, &self.config.physics);
        if restored.dropped > 0 || restored.clamped > 0 {
            info!(dropped = restored.dropped, clamped = restored.clamped, "repaired saved state");
        }
        self.items = restored.items;
        self.next_weight = match restored.next_weight {
            Some(w) => Some(w),
            None => Some(self.roll_weight()),
        };
        self.input = InputState::Idle;
        self.physics = physics::compute_physics(self.items.items(), &self.config.physics);
        self.latch.reset_to(self.physics.balanced);
        self.current_angle = self.physics.target_angle;
        debug!(items = self.items.len(), angle = self.current_angle, "state hydrated");
        vec![Action::RenderNeeded]
    }

    /// The durable part of the state. The animated angle is not included.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.items().to_vec(),
            next_id: self.items.next_id(),
            next_weight: self.next_weight,
        }
    }

    // --- Layout ---

    /// Set the pivot's screen position.
    pub fn set_pivot(&mut self, pivot: Point) {
        self.pivot = pivot;
    }

    /// Change the plank's half-length, pulling items that now hang off the end back on.
    pub fn set_plank_half_length(&mut self, half_plank_length: f64) -> Vec<Action> {
        if half_plank_length.is_nan() || half_plank_length <= 0.0 {
            return Vec::new();
        }
        self.config.physics.half_plank_length = half_plank_length;
        let moved = self.items.clamp_positions(half_plank_length);
        debug!(half_plank_length, moved, "plank resized");
        let mut actions = Vec::new();
        self.recompute(&mut actions);
        if moved > 0 {
            actions.push(Action::PersistRequested);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Item mutations ---

    /// Place an item. Uses the pre-rolled next weight unless `weight` is given,
    /// then rolls a fresh next weight either way.
    pub fn add_item(&mut self, position: f64, weight: Option<f64>) -> Vec<Action> {
        let p = self.config.physics;
        let position = geometry::clamp_position(position, p.half_plank_length);
        let weight = match weight.or(self.next_weight) {
            Some(w) if w.is_finite() => w.clamp(p.weight_min, p.weight_max),
            _ => self.roll_weight(),
        };
        let item = self.items.add(position, weight);
        self.next_weight = Some(self.roll_weight());
        debug!(id = %item.id, position, weight, "item added");

        let mut actions = vec![Action::ItemAdded(item), Action::Sound(SoundEvent::Added)];
        self.recompute(&mut actions);
        actions.push(Action::PersistRequested);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove an item by id. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ItemId) -> Vec<Action> {
        if self.items.remove(id).is_none() {
            return Vec::new();
        }
        if self.input.active_item() == Some(id) {
            self.input = InputState::Idle;
        }
        debug!(id = %id, "item removed");

        let mut actions = vec![Action::ItemRemoved { id }, Action::Sound(SoundEvent::Removed)];
        self.recompute(&mut actions);
        actions.push(Action::PersistRequested);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Clear the plank and roll a fresh next weight. Ids keep counting up.
    ///
    /// Like removing the last item, clearing an unbalanced plank plays the balance cue.
    pub fn reset(&mut self) -> Vec<Action> {
        self.items.clear();
        self.input = InputState::Idle;
        self.next_weight = Some(self.roll_weight());
        info!("seesaw reset");

        let mut actions = vec![Action::ItemsCleared, Action::Sound(SoundEvent::Removed)];
        self.recompute(&mut actions);
        actions.push(Action::PersistRequested);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    /// Route a normalized gesture to its handler.
    pub fn handle(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture.kind {
            GestureKind::PrimaryPress => self.on_press(gesture),
            GestureKind::PrimaryMove => self.on_move(gesture),
            GestureKind::PrimaryRelease => self.on_release(gesture),
            GestureKind::Secondary => self.on_secondary(gesture),
        }
    }

    fn on_press(&mut self, gesture: Gesture) -> Vec<Action> {
        // A press without a release for the previous gesture ends that gesture first.
        let mut actions = if self.input == InputState::Idle { Vec::new() } else { self.on_release(gesture) };

        let local = self.to_local(gesture.screen);
        let target = hit::hit_test(
            local,
            &self.items,
            self.config.physics.half_plank_length,
            self.config.input.plank_hit_half_height,
        );
        match target {
            HitTarget::Item(id) => {
                let origin_position = self.items.get(id).map_or(0.0, |i| i.position);
                self.input = match gesture.pointer {
                    PointerKind::Mouse => InputState::Dragging { id, origin_position },
                    PointerKind::Touch => InputState::PendingLongPress {
                        id,
                        pressed_at_ms: gesture.at_ms,
                        press_screen: gesture.screen,
                    },
                };
                actions.push(Action::RenderNeeded);
            }
            HitTarget::Plank => {
                let position = geometry::clamp_position(local.x, self.config.physics.half_plank_length);
                actions.extend(self.add_item(position, None));
            }
            HitTarget::Outside => {}
        }
        actions
    }

    fn on_move(&mut self, gesture: Gesture) -> Vec<Action> {
        if let Some(removed) = self.fire_due_long_press(gesture.at_ms) {
            return removed;
        }
        match self.input {
            InputState::Dragging { id, .. } => self.drag_to(id, gesture.screen),
            InputState::PendingLongPress { id, press_screen, .. } => {
                if gesture.screen.distance_to(press_screen) <= self.config.input.drag_threshold_px {
                    return Vec::new();
                }
                let origin_position = self.items.get(id).map_or(0.0, |i| i.position);
                self.input = InputState::Dragging { id, origin_position };
                self.drag_to(id, gesture.screen)
            }
            InputState::Idle | InputState::LongPressConsumed => Vec::new(),
        }
    }

    fn drag_to(&mut self, id: ItemId, screen: Point) -> Vec<Action> {
        let position = geometry::local_position(
            screen,
            self.pivot,
            self.current_angle,
            self.config.physics.half_plank_length,
        );
        if !self.items.set_position(id, position) {
            self.input = InputState::Idle;
            return Vec::new();
        }
        let mut actions = vec![Action::ItemMoved { id, position }];
        self.recompute(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    fn on_release(&mut self, gesture: Gesture) -> Vec<Action> {
        // A press held past the delay is a removal even if no frame ran in between.
        if let Some(removed) = self.fire_due_long_press(gesture.at_ms) {
            self.input = InputState::Idle;
            return removed;
        }
        let state = std::mem::take(&mut self.input);
        match state {
            InputState::Dragging { id, origin_position } => {
                let Some(item) = self.items.get(id).copied() else {
                    return Vec::new();
                };
                debug!(id = %id, from = origin_position, to = item.position, "drag finished");
                let mut actions = Vec::new();
                self.recompute(&mut actions);
                actions.push(Action::PersistRequested);
                actions.push(Action::RenderNeeded);
                actions
            }
            InputState::PendingLongPress { .. } => vec![Action::RenderNeeded],
            InputState::Idle | InputState::LongPressConsumed => Vec::new(),
        }
    }

    fn on_secondary(&mut self, gesture: Gesture) -> Vec<Action> {
        if self.input != InputState::Idle {
            return Vec::new();
        }
        let local = self.to_local(gesture.screen);
        let target = hit::hit_test(
            local,
            &self.items,
            self.config.physics.half_plank_length,
            self.config.input.plank_hit_half_height,
        );
        match target {
            HitTarget::Item(id) => self.remove_item(id),
            HitTarget::Plank | HitTarget::Outside => Vec::new(),
        }
    }

    // --- Frame ---

    /// Advance one display frame: fire a due long press, then ease the angle.
    #[allow(clippy::float_cmp)]
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let mut actions = self.fire_due_long_press(now_ms).unwrap_or_default();

        let next = animator::advance(self.current_angle, self.physics.target_angle, &self.config.animator);
        if next != self.current_angle {
            self.current_angle = next;
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Result of the latest physics recompute.
    #[must_use]
    pub fn physics(&self) -> &PhysicsResult {
        &self.physics
    }

    #[must_use]
    pub fn target_angle(&self) -> f64 {
        self.physics.target_angle
    }

    /// Angle currently shown, in degrees.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Weight the next added item will get.
    #[must_use]
    pub fn next_weight(&self) -> Option<f64> {
        self.next_weight
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    // --- Internals ---

    fn to_local(&self, screen: Point) -> Point {
        geometry::to_plank_local(screen, self.pivot, self.current_angle)
    }

    /// Remove the item under a pending long press once its delay has elapsed at `now_ms`.
    fn fire_due_long_press(&mut self, now_ms: f64) -> Option<Vec<Action>> {
        let InputState::PendingLongPress { id, pressed_at_ms, .. } = self.input else {
            return None;
        };
        if now_ms - pressed_at_ms < self.config.input.long_press_delay_ms {
            return None;
        }
        self.input = InputState::LongPressConsumed;
        debug!(id = %id, "long press");
        Some(self.remove_item(id))
    }

    fn recompute(&mut self, actions: &mut Vec<Action>) {
        self.physics = physics::compute_physics(self.items.items(), &self.config.physics);
        if self.latch.observe(self.physics.balanced) {
            debug!("balance achieved");
            actions.push(Action::Sound(SoundEvent::BalanceAchieved));
        }
    }

    /// Roll a whole-number weight inside the configured range.
    fn roll_weight(&mut self) -> f64 {
        let p = self.config.physics;
        let lo = p.weight_min.ceil();
        let hi = p.weight_max.floor();
        if lo <= hi {
            self.rng.random_range(lo..hi + 1.0).floor().min(hi)
        } else if p.weight_min < p.weight_max {
            self.rng.random_range(p.weight_min..p.weight_max)
        } else {
            p.weight_min
        }
    }
}
