//! Input model: pointer buttons, modifier keys, and the drag gesture
//! state machine.
//!
//! `DragState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute per-move offsets and
//! decide on release whether anything gets committed. It is discarded
//! unconditionally on pointer-up, whatever the outcome.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::dom::NodeId;
use crate::geom::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// A keyboard key, holding the key name as reported by the host
/// (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key removes the selected element.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }
}

/// The drag gesture state machine.
///
/// A pointer-down on a selectable element arms the gesture without moving
/// anything; only crossing the displacement threshold promotes it to
/// `Dragging`. A press that releases below the threshold is a plain click.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No pointer gesture in progress.
    #[default]
    Idle,
    /// Pointer is down on an element; displacement has not crossed the
    /// threshold yet.
    Armed {
        /// Element the gesture would move.
        target: NodeId,
        /// Viewport position of the initial pointer-down.
        start: Point,
    },
    /// The element is actively tracking the pointer.
    Dragging {
        /// Element being moved.
        target: NodeId,
        /// Viewport position of the initial pointer-down.
        start: Point,
        /// Inline `left` offset at the moment the drag became active.
        origin_left: f64,
        /// Inline `top` offset at the moment the drag became active.
        origin_top: f64,
    },
}
