//! Engine: mounts slide fragments and turns host input into tree mutations.
//!
//! DESIGN
//! ======
//! The mounted fragment tree is the only model. Every read (position mode,
//! inline offsets, geometry) is reconstructed from the tree at the moment it
//! is needed, and every committed interaction funnels through one flush that
//! serializes the tree back into slide markup ([`Action::SlideUpdated`]).
//! The host wires platform events in — with the event-target node id, the
//! way a browser delivers `event.target` — and applies the returned actions:
//! persisting markup, focusing the text editor, repainting chrome. Nothing
//! here blocks or performs I/O; the single-threaded event loop of the host
//! serializes all access to the tree.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{DRAG_THRESHOLD_PX, DRAG_Z_INDEX};
use crate::dom::{FragmentDom, NodeId};
use crate::geom::{GeometrySource, Point};
use crate::input::{Button, DragState, Key, Modifiers};
use crate::overlay::{self, OverlayFrame};
use crate::select;
use crate::slide::Slide;
use crate::style::Position;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The mounted markup changed and was serialized; store it as the active
    /// slide's new content.
    SlideUpdated(String),
    /// Begin native text editing on the element and give it input focus.
    EditTextRequested(NodeId),
    /// Selection or element state changed; repaint chrome.
    RenderNeeded,
}

/// The live-DOM direct-manipulation engine for one mounted slide.
pub struct Engine {
    dom: FragmentDom,
    mounted_id: String,
    mounted_html: String,
    selected: Option<NodeId>,
    drag: DragState,
    editing: Option<NodeId>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dom: FragmentDom::parse(""),
            mounted_id: String::new(),
            mounted_html: String::new(),
            selected: None,
            drag: DragState::Idle,
            editing: None,
        }
    }

    // ── Mount lifecycle ─────────────────────────────────────────

    /// Mount a slide: unconditional full replace of the fragment tree
    /// whenever the slide identity or content string differs from what is
    /// currently mounted. Selection and any in-flight drag or edit reference
    /// the old tree and are cleared synchronously in the same step.
    pub fn mount(&mut self, slide: &Slide) -> Vec<Action> {
        if self.mounted_id == slide.id && self.mounted_html == slide.html_content {
            return Vec::new();
        }
        self.dom = FragmentDom::parse(&slide.html_content);
        self.mounted_id.clone_from(&slide.id);
        self.mounted_html.clone_from(&slide.html_content);
        self.selected = None;
        self.drag = DragState::Idle;
        self.editing = None;
        vec![Action::RenderNeeded]
    }

    // ── Pointer input ───────────────────────────────────────────

    /// Pointer-down: resolve the logical target and arm a drag.
    ///
    /// Targets outside the mounted tree are ignored entirely (clicks on
    /// surrounding chrome). The root itself clears the selection — clicking
    /// empty canvas background must deselect, not select the canvas.
    pub fn on_pointer_down(
        &mut self,
        target: NodeId,
        at: Point,
        button: Button,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if !self.dom.is_connected(target) {
            return Vec::new();
        }
        if target == self.dom.root() {
            return self.clear_selection();
        }
        let Some(el) = select::resolve_selectable(&self.dom, target) else {
            return self.clear_selection();
        };
        self.selected = Some(el);
        self.drag = DragState::Armed { target: el, start: at };
        vec![Action::RenderNeeded]
    }

    /// Pointer-move: threshold gate, then per-axis offset tracking.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        match self.drag {
            DragState::Idle => Vec::new(),
            DragState::Armed { target, start } => {
                if start.distance_to(at) <= DRAG_THRESHOLD_PX {
                    return Vec::new();
                }
                if !self.dom.is_connected(target) {
                    self.drag = DragState::Idle;
                    return Vec::new();
                }
                let (origin_left, origin_top) = self.init_drag(target);
                self.drag = DragState::Dragging { target, start, origin_left, origin_top };
                self.apply_drag(target, start, origin_left, origin_top, at)
            }
            DragState::Dragging { target, start, origin_left, origin_top } => {
                if !self.dom.is_connected(target) {
                    self.drag = DragState::Idle;
                    return Vec::new();
                }
                self.apply_drag(target, start, origin_left, origin_top, at)
            }
        }
    }

    /// Pointer-up: commit an active drag, or silently discard a press that
    /// never crossed the threshold (no style change, no sink call — this is
    /// the plain-select path and the prelude to a double-click edit).
    pub fn on_pointer_up(&mut self, _at: Point) -> Vec<Action> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle | DragState::Armed { .. } => Vec::new(),
            DragState::Dragging { target, .. } => {
                if !self.dom.is_connected(target) {
                    // Detached mid-drag: already cancelled, nothing to commit.
                    return Vec::new();
                }
                let mut style = self.dom.inline_style(target);
                style.remove("z-index");
                style.remove("cursor");
                style.remove("transition");
                self.dom.set_inline_style(target, &style);
                vec![self.flush(), Action::RenderNeeded]
            }
        }
    }

    // ── Text editing ────────────────────────────────────────────

    /// Double-click: put the nearest text-bearing element into editing.
    /// Any in-progress drag session is discarded — editing must never leave
    /// a dangling armed or active drag behind. Non-text targets are a no-op.
    pub fn on_double_click(&mut self, target: NodeId) -> Vec<Action> {
        let Some(el) = select::resolve_editable(&self.dom, target) else {
            return Vec::new();
        };
        self.drag = DragState::Idle;
        self.dom.set_attr(el, "contenteditable", "true");
        self.editing = Some(el);
        vec![Action::EditTextRequested(el), Action::RenderNeeded]
    }

    /// Host relay of native text input while an edit session is active.
    pub fn on_text_input(&mut self, text: &str) -> Vec<Action> {
        let Some(el) = self.editing else {
            return Vec::new();
        };
        if !self.dom.is_connected(el) {
            self.editing = None;
            return Vec::new();
        }
        self.dom.set_text(el, text);
        vec![Action::RenderNeeded]
    }

    /// Focus-loss commit for an edit session. Taking the session out of
    /// `editing` before the flush guarantees exactly one commit even if the
    /// host reports focus loss more than once.
    pub fn on_blur(&mut self) -> Vec<Action> {
        let Some(el) = self.editing.take() else {
            return Vec::new();
        };
        if !self.dom.is_connected(el) {
            return Vec::new();
        }
        self.dom.set_attr(el, "contenteditable", "false");
        vec![self.flush(), Action::RenderNeeded]
    }

    // ── Keyboard ────────────────────────────────────────────────

    /// Delete/Backspace removes the selected element and commits at once.
    /// Keystrokes during a text edit belong to the editor, not the canvas.
    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_delete() || self.editing.is_some() {
            return Vec::new();
        }
        let Some(el) = self.selected.take() else {
            return Vec::new();
        };
        self.drag = DragState::Idle;
        if !self.dom.is_connected(el) {
            return vec![Action::RenderNeeded];
        }
        self.dom.detach(el);
        vec![self.flush(), Action::RenderNeeded]
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.selected
    }

    /// The element currently in text editing, if any.
    #[must_use]
    pub fn editing(&self) -> Option<NodeId> {
        self.editing
    }

    /// Read-only view of the mounted tree.
    #[must_use]
    pub fn dom(&self) -> &FragmentDom {
        &self.dom
    }

    /// Current serialized markup of the mount container. Pure read; does not
    /// commit anything.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.dom.serialize_inner(self.dom.root())
    }

    /// One overlay poll tick for the current selection. `None` when nothing
    /// is selected or the selected element detached.
    #[must_use]
    pub fn overlay_frame(&self, geometry: &dyn GeometrySource) -> Option<OverlayFrame> {
        let target = self.selected?;
        overlay::frame(&self.dom, target, geometry)
    }

    // ── internals ───────────────────────────────────────────────

    fn clear_selection(&mut self) -> Vec<Action> {
        self.drag = DragState::Idle;
        if self.selected.take().is_some() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Promote an armed press into an active drag.
    ///
    /// A static element is upgraded to `relative` so offsets move it
    /// visually while its original space stays reserved — never `absolute`,
    /// which would collapse sibling layout. Starting offsets come from the
    /// inline declarations (the only cascade source in a fragment, so the
    /// resolved and inline values coincide); unset or `auto` reads as 0, and
    /// reading inline values keeps repeated drags from compounding.
    fn init_drag(&mut self, target: NodeId) -> (f64, f64) {
        let mut style = self.dom.inline_style(target);
        if style.position() == Position::Static {
            style.set("position", Position::Relative.keyword());
        }
        let origin_left = style.px("left").unwrap_or(0.0);
        let origin_top = style.px("top").unwrap_or(0.0);

        // Transient affordances, cleared again on commit.
        style.set("z-index", DRAG_Z_INDEX);
        style.set("cursor", "grabbing");
        style.set("transition", "none");
        self.dom.set_inline_style(target, &style);
        (origin_left, origin_top)
    }

    /// Per-move update: new position = starting offset + pointer delta,
    /// applied independently per axis. No clamping — elements may leave the
    /// visible slide area.
    fn apply_drag(
        &mut self,
        target: NodeId,
        start: Point,
        origin_left: f64,
        origin_top: f64,
        at: Point,
    ) -> Vec<Action> {
        let mut style = self.dom.inline_style(target);
        style.set("left", &format!("{}px", origin_left + (at.x - start.x)));
        style.set("top", &format!("{}px", origin_top + (at.y - start.y)));
        self.dom.set_inline_style(target, &style);
        vec![Action::RenderNeeded]
    }

    /// The mutation sink: serialize the mounted tree and hand it back to the
    /// deck. Idempotent — two flushes with no intervening mutation yield
    /// byte-identical strings.
    fn flush(&mut self) -> Action {
        let html = self.serialize();
        self.mounted_html.clone_from(&html);
        Action::SlideUpdated(html)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
