//! Input model: normalized gestures and the interaction state machine's states.
//!
//! The host translates mouse and touch events into [`Gesture`]s before they
//! reach the engine: a press, a move, a release, or a secondary action
//! (right-click). `InputState` is the gesture currently being tracked between
//! press and release, carrying the context needed to finish it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ItemId;
use crate::geometry::Point;

/// Device a gesture came from. Touch presses on items use long-press removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Gesture category delivered by the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Left button down or finger down.
    PrimaryPress,
    /// Pointer or finger moved while down.
    PrimaryMove,
    /// Left button up or finger lifted.
    PrimaryRelease,
    /// Right-click (context menu).
    Secondary,
}

/// One normalized input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    /// Screen-space pointer position.
    pub screen: Point,
    pub pointer: PointerKind,
    /// Event time in milliseconds on the same clock as the frame tick.
    pub at_ms: f64,
}

impl Gesture {
    #[must_use]
    pub fn new(kind: GestureKind, screen: Point, pointer: PointerKind, at_ms: f64) -> Self {
        Self { kind, screen, pointer, at_ms }
    }
}

/// Internal state for the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// An item follows the pointer until release.
    Dragging {
        /// Id of the item being dragged.
        id: ItemId,
        /// Item position when the drag began.
        origin_position: f64,
    },
    /// A touch press on an item that becomes a removal if held long enough.
    PendingLongPress {
        /// Id of the pressed item.
        id: ItemId,
        /// When the press started.
        pressed_at_ms: f64,
        /// Screen position of the press, for the drag threshold.
        press_screen: Point,
    },
    /// The long press fired and removed the item; the rest of the gesture is ignored.
    LongPressConsumed,
}

impl InputState {
    /// The item the current gesture is acting on, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<ItemId> {
        match self {
            Self::Dragging { id, .. } | Self::PendingLongPress { id, .. } => Some(*id),
            Self::Idle | Self::LongPressConsumed => None,
        }
    }

    /// Whether an item is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
