//! Host runtime: owns the engine and its collaborators and routes actions.
//!
//! DESIGN
//! ======
//! `EngineCore` only returns [`Action`]s. `Host` is the single owner that
//! turns them into effects: sound cues go straight to the [`SoundSink`],
//! while persistence and rendering are coalesced so one batch of actions
//! yields at most one save and one render. Persistence failures are logged
//! and the simulation carries on in memory.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use tracing::{debug, error, info, warn};

use crate::engine::{Action, EngineCore, SoundEvent};
use crate::geometry::Point;
use crate::input::{Gesture, GestureKind, InputState, PointerKind};
use crate::persist::StateStore;
use crate::render::{RenderSink, Scene};

/// Consumer of sound cues. Free to ignore them.
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Sound sink for headless runs: logs each cue.
#[derive(Debug, Default)]
pub struct LogSoundSink;

impl SoundSink for LogSoundSink {
    fn play(&mut self, event: SoundEvent) {
        info!(event = event.name(), "sound");
    }
}

/// What one dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatched {
    pub rendered: bool,
    pub persisted: bool,
    pub sounds: usize,
}

/// Single owner of the simulation and its sinks.
pub struct Host<S, R, A> {
    core: EngineCore,
    store: S,
    renderer: R,
    sound: A,
}

impl<S, R, A> Host<S, R, A>
where
    S: StateStore,
    R: RenderSink,
    A: SoundSink,
{
    /// Hydrate `core` from `store` (falling back to its current state when
    /// nothing usable is stored) and draw the first scene.
    pub fn start(mut core: EngineCore, store: S, renderer: R, sound: A) -> Self {
        let actions = match store.load() {
            Ok(Some(snapshot)) => core.load_snapshot(snapshot),
            Ok(None) => {
                debug!("no saved state");
                vec![Action::RenderNeeded]
            }
            Err(e) => {
                warn!(error = %e, "saved state unreadable, starting empty");
                vec![Action::RenderNeeded]
            }
        };
        let mut host = Self { core, store, renderer, sound };
        host.dispatch(actions);
        host
    }

    /// Feed one normalized gesture to the engine.
    pub fn gesture(&mut self, gesture: Gesture) -> Dispatched {
        let actions = self.core.handle(gesture);
        self.dispatch(actions)
    }

    /// Run one display frame.
    pub fn frame(&mut self, now_ms: f64) -> Dispatched {
        let actions = self.core.tick(now_ms);
        self.dispatch(actions)
    }

    /// Clear the plank.
    pub fn reset(&mut self) -> Dispatched {
        let actions = self.core.reset();
        self.dispatch(actions)
    }

    /// Apply a new plank size.
    pub fn resize(&mut self, half_plank_length: f64) -> Dispatched {
        let actions = self.core.set_plank_half_length(half_plank_length);
        self.dispatch(actions)
    }

    /// The input stream has ended. Commits a drag that never saw its release
    /// so the final position is saved.
    pub fn end_input(&mut self, now_ms: f64) -> Dispatched {
        if !self.core.input_state().is_dragging() {
            return Dispatched::default();
        }
        debug!("input ended mid-drag, releasing");
        let release = Gesture::new(GestureKind::PrimaryRelease, self.core.pivot(), PointerKind::default(), now_ms);
        self.gesture(release)
    }

    /// Whether the displayed angle has reached its target and no long press is pending.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_at_rest(&self) -> bool {
        self.core.current_angle() == self.core.target_angle()
            && !matches!(self.core.input_state(), InputState::PendingLongPress { .. })
    }

    /// Move the pivot's screen position.
    pub fn set_pivot(&mut self, pivot: Point) {
        self.core.set_pivot(pivot);
    }

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn sound(&self) -> &A {
        &self.sound
    }

    /// Route a batch of actions to the sinks.
    pub fn dispatch(&mut self, actions: Vec<Action>) -> Dispatched {
        let mut out = Dispatched::default();
        let mut wants_persist = false;
        let mut wants_render = false;

        for action in actions {
            match action {
                Action::Sound(event) => {
                    self.sound.play(event);
                    out.sounds += 1;
                }
                Action::PersistRequested => wants_persist = true,
                Action::RenderNeeded => wants_render = true,
                Action::ItemAdded(item) => debug!(id = %item.id, weight = item.weight, "added"),
                Action::ItemMoved { .. } => {}
                Action::ItemRemoved { id } => debug!(id = %id, "removed"),
                Action::ItemsCleared => debug!("cleared"),
            }
        }

        if wants_persist {
            match self.store.save(&self.core.snapshot()) {
                Ok(()) => out.persisted = true,
                Err(e) => error!(error = %e, "state save failed"),
            }
        }
        if wants_render {
            self.renderer.render(&Scene::from_core(&self.core));
            out.rendered = true;
        }
        out
    }
}
