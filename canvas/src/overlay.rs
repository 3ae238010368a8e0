//! Selection overlay: a read-only visual frame around the selected element.
//!
//! The overlay never hooks individual mutation paths. The host polls
//! [`frame`] on a fixed interval ([`crate::consts::OVERLAY_POLL_INTERVAL_MS`])
//! plus on window resize/scroll, and redraws from whatever geometry comes
//! back — robust against any path that moved the element (drag, reflow from
//! an edit, external resize). A `None` return means the target detached or
//! became unmeasurable; the host stops updating and tears the overlay down.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::OVERLAY_HANDLE_RADIUS_PX;
use crate::dom::{FragmentDom, NodeId};
use crate::geom::{GeometrySource, Rect};

/// One visual frame of the selection overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// Bounding box of the selected element, relative to the mount root.
    pub rect: Rect,
    /// Lower-cased tag name shown in the overlay's label chip.
    pub label: String,
    /// Corner handles (nw, ne, sw, se), relative to the mount root.
    pub handles: [Rect; 4],
}

/// Compute the overlay frame for `target` from live geometry.
///
/// Both rectangles are re-read on every call; nothing is cached between
/// polls. Returns `None` when the target is no longer connected or either
/// rectangle cannot be measured.
#[must_use]
pub fn frame(
    dom: &FragmentDom,
    target: NodeId,
    geometry: &dyn GeometrySource,
) -> Option<OverlayFrame> {
    if !dom.is_connected(target) {
        return None;
    }
    let root_rect = geometry.bounding_rect(dom.root())?;
    let target_rect = geometry.bounding_rect(target)?;
    let rect = target_rect.relative_to(root_rect);
    let label = dom.tag(target).unwrap_or_default().to_string();
    Some(OverlayFrame { rect, label, handles: corner_handles(rect) })
}

fn corner_handles(rect: Rect) -> [Rect; 4] {
    let r = OVERLAY_HANDLE_RADIUS_PX;
    let handle = |cx: f64, cy: f64| Rect::new(cx - r, cy - r, r * 2.0, r * 2.0);
    [
        handle(rect.left, rect.top),
        handle(rect.left + rect.width, rect.top),
        handle(rect.left, rect.top + rect.height),
        handle(rect.left + rect.width, rect.top + rect.height),
    ]
}
