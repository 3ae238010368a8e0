//! Selection and editability resolution over the mounted fragment.
//!
//! Given the raw event-target node the host reports, decide which element
//! the user logically meant to manipulate. Pure reads over the tree — no
//! state is kept here.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::dom::{FragmentDom, NodeId};
use crate::style::clips_background_to_text;

/// Tags treated as logically selectable manipulation targets.
const SELECTABLE_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "img", "li", "span", "button", "a",
];

/// Tags whose text the inline editor may take over on double-click.
const TEXT_TAGS: &[&str] = &["h1", "h2", "h3", "p", "span", "li"];

/// Author marker flagging an element as editable regardless of tag.
pub const EDITABLE_MARKER: &str = "data-editable";

/// Ancestor levels inspected for text-clipping visual wrappers.
const CLIP_WRAPPER_CLIMB: usize = 2;

/// Resolve the element a pointer-down on `target` should select.
///
/// Climbs to the nearest logically selectable ancestor (inclusive), falls
/// back to a bare `div` container (a card is draggable even without a
/// semantic tag), then promotes through text-clipping wrappers: selecting
/// the inner span of a gradient-filled heading would orphan the painted
/// style mid-drag. The mount root itself is never selectable.
#[must_use]
pub fn resolve_selectable(dom: &FragmentDom, target: NodeId) -> Option<NodeId> {
    let root = dom.root();
    if target == root || !dom.is_connected(target) {
        return None;
    }

    let mut candidate = climb(dom, target, |dom, id| {
        dom.has_attr(id, EDITABLE_MARKER) || dom.tag(id).is_some_and(|t| SELECTABLE_TAGS.contains(&t))
    });

    if candidate.is_none() && dom.tag(target) == Some("div") {
        candidate = Some(target);
    }

    let mut current = candidate?;
    for _ in 0..CLIP_WRAPPER_CLIMB {
        let Some(parent) = dom.parent(current) else {
            break;
        };
        if parent == root {
            break;
        }
        if clips_background_to_text(&dom.inline_style(parent)) {
            current = parent;
        } else {
            break;
        }
    }
    Some(current)
}

/// Resolve the element a double-click on `target` should put into text
/// editing: the nearest text-bearing ancestor, or any element the fragment
/// author already marked `contenteditable`.
#[must_use]
pub fn resolve_editable(dom: &FragmentDom, target: NodeId) -> Option<NodeId> {
    if !dom.is_connected(target) {
        return None;
    }
    climb(dom, target, |dom, id| {
        dom.has_attr(id, "contenteditable") || dom.tag(id).is_some_and(|t| TEXT_TAGS.contains(&t))
    })
}

/// Walk from `from` up to (but excluding) the root, returning the first
/// element the predicate accepts.
fn climb(
    dom: &FragmentDom,
    from: NodeId,
    accepts: impl Fn(&FragmentDom, NodeId) -> bool,
) -> Option<NodeId> {
    let root = dom.root();
    let mut cursor = Some(from);
    while let Some(id) = cursor {
        if id == root {
            return None;
        }
        if dom.is_element(id) && accepts(dom, id) {
            return Some(id);
        }
        cursor = dom.parent(id);
    }
    None
}
