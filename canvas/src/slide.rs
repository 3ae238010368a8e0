#[cfg(test)]
#[path = "slide_test.rs"]
mod slide_test;

use serde::{Deserialize, Serialize};

/// One slide as stored by the deck and on the wire.
///
/// `html_content` is a self-contained fragment with no outer document tags;
/// the canvas mounts it verbatim and writes the mutated markup back through
/// the same field. Ids are assigned by the generator and stay stable across
/// edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Opaque identifier, unique within a deck.
    pub id: String,
    /// The slide's HTML fragment — the persisted form of the live tree.
    pub html_content: String,
    /// Speaker notes, shown beside the canvas but never mounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    #[must_use]
    pub fn new(id: impl Into<String>, html_content: impl Into<String>) -> Self {
        Self { id: id.into(), html_content: html_content.into(), notes: None }
    }
}
