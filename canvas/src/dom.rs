//! Fragment DOM: the live tree a mounted slide is manipulated through.
//!
//! DESIGN
//! ======
//! Slides arrive as opaque HTML fragments and leave as HTML fragments; in
//! between, this arena tree *is* the model. Nothing else in the crate caches
//! node data — selection, drag, and overlay code re-read the tree on every
//! interaction and the serializer is the single point where a consistent
//! snapshot is captured back into slide markup.
//!
//! The scanner is a forgiving single-pass tag reader (quoted attributes,
//! void and self-closing elements, comments, raw-text elements), not a
//! full HTML parser: fragments are generator-produced and well-formed by
//! contract. Text is stored verbatim, never entity-decoded,
//! so serializing twice without an intervening mutation is byte-identical.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::style::InlineStyle;

/// ID used to address nodes in the fragment arena.
pub type NodeId = usize;

/// Elements that never take children and close themselves.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is raw text until the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

const NO_CHILDREN: &[NodeId] = &[];

/// Payload of one node in the fragment tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The synthetic mount container. Never serialized itself.
    Root,
    /// An element with its tag and ordered attribute list.
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    /// A run of markup text, stored verbatim.
    Text(String),
    /// A comment, without the `<!--`/`-->` delimiters.
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    connected: bool,
}

/// The live fragment tree for one mounted slide.
#[derive(Debug, Clone)]
pub struct FragmentDom {
    nodes: Vec<Node>,
    root: NodeId,
}

impl FragmentDom {
    /// Parse a fragment string into a fresh tree under a synthetic root.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let mut dom = Self {
            nodes: vec![Node {
                data: NodeData::Root,
                parent: None,
                children: Vec::new(),
                connected: true,
            }],
            root: 0,
        };
        let mut open: Vec<NodeId> = vec![dom.root];
        let bytes = html.as_bytes();
        let mut idx = 0_usize;

        while idx < bytes.len() {
            let parent = open.last().copied().unwrap_or(dom.root);

            if bytes[idx] != b'<' {
                let end = find_byte(bytes, idx, b'<').unwrap_or(bytes.len());
                dom.push_node(parent, NodeData::Text(html[idx..end].to_string()));
                idx = end;
                continue;
            }

            if starts_with(bytes, idx, b"<!--") {
                let (comment, next) = read_comment(html, idx);
                dom.push_node(parent, NodeData::Comment(comment.to_string()));
                idx = next;
                continue;
            }

            // Doctype / other markup declarations: dropped, fragments have none.
            if starts_with(bytes, idx, b"<!") {
                idx = skip_to_gt(bytes, idx + 2);
                continue;
            }

            let Some((tag, next)) = parse_tag(html, idx) else {
                // Stray '<' that opens no tag: keep it as text.
                dom.push_node(parent, NodeData::Text("<".to_string()));
                idx += 1;
                continue;
            };
            idx = next;

            if tag.is_end {
                close_open_element(&dom, &mut open, &tag.name);
                continue;
            }

            let id = dom.push_node(
                parent,
                NodeData::Element { tag: tag.name.clone(), attrs: tag.attrs },
            );

            if RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
                let (raw, after) = read_raw_text(html, idx, &tag.name);
                if !raw.is_empty() {
                    dom.push_node(id, NodeData::Text(raw.to_string()));
                }
                idx = after;
                continue;
            }

            if !tag.self_closing && !VOID_ELEMENTS.contains(&tag.name.as_str()) {
                open.push(id);
            }
        }

        dom
    }

    /// The synthetic mount container.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.data(id), Some(NodeData::Element { .. }))
    }

    /// Lower-cased tag name; `None` for text, comments, and the root.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.data(id) {
            Some(NodeData::Element { tag, .. }) => Some(tag.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.data(id) {
            Some(NodeData::Element { attrs, .. }) => attrs
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Set an attribute, replacing in place or appending. No-op on non-elements.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(Node { data: NodeData::Element { attrs, .. }, .. }) = self.nodes.get_mut(id) {
            if let Some(attr) = attrs.iter_mut().find(|(n, _)| *n == name) {
                attr.1 = value.to_string();
            } else {
                attrs.push((name, value.to_string()));
            }
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(Node { data: NodeData::Element { attrs, .. }, .. }) = self.nodes.get_mut(id) {
            attrs.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(NO_CHILDREN, |n| n.children.as_slice())
    }

    /// Whether the node still hangs off the mount root. Unknown ids read as
    /// disconnected, so stale references from a previous mount are inert.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.connected)
    }

    /// Remove a subtree from the tree. The nodes stay in the arena, marked
    /// disconnected, so stale references fail the liveness check instead of
    /// resolving to recycled storage.
    pub fn detach(&mut self, id: NodeId) {
        if id == self.root || !self.is_connected(id) {
            return;
        }
        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|child| *child != id);
            }
        }
        self.mark_disconnected(id);
    }

    /// Replace an element's children with a single verbatim text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if !self.is_element(id) {
            return;
        }
        let old: Vec<NodeId> = self.children(id).to_vec();
        for child in old {
            self.mark_disconnected(child);
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.children.clear();
        }
        if !text.is_empty() {
            self.push_node(id, NodeData::Text(text.to_string()));
        }
    }

    /// Concatenated text of the subtree, comments excluded.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Parsed inline `style` attribute; empty when absent.
    #[must_use]
    pub fn inline_style(&self, id: NodeId) -> InlineStyle {
        InlineStyle::parse(self.attr(id, "style").unwrap_or(""))
    }

    /// Write an inline style back. An empty declaration list removes the
    /// attribute entirely.
    pub fn set_inline_style(&mut self, id: NodeId, style: &InlineStyle) {
        if style.is_empty() {
            self.remove_attr(id, "style");
        } else {
            self.set_attr(id, "style", &style.to_attr());
        }
    }

    /// Serialize the node's children — the `innerHTML` read. Pure, so calling
    /// it twice with no intervening mutation yields byte-identical strings.
    #[must_use]
    pub fn serialize_inner(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_node(*child, &mut out);
        }
        out
    }

    /// Connected descendants of `id` in document order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// First connected element with the given tag, in document order.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|id| self.tag(*id).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
    }

    // ── internals ───────────────────────────────────────────────

    fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id).map(|n| &n.data)
    }

    fn push_node(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.len();
        let connected = self.is_connected(parent);
        self.nodes.push(Node { data, parent: Some(parent), children: Vec::new(), connected });
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        id
    }

    fn mark_disconnected(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next) {
                node.connected = false;
                stack.extend(node.children.iter().copied());
            }
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(NodeData::Text(text)) = self.data(id) {
            out.push_str(text);
        }
        for child in self.children(id) {
            self.collect_text(*child, out);
        }
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match self.data(id) {
            None | Some(NodeData::Root) => {}
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(NodeData::Comment(comment)) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Some(NodeData::Element { tag, attrs }) => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&value.replace('"', "&quot;"));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in self.children(id) {
                    self.write_node(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

// ── scanner ─────────────────────────────────────────────────────

#[derive(Debug)]
struct ParsedTag {
    name: String,
    attrs: Vec<(String, String)>,
    is_end: bool,
    self_closing: bool,
}

/// Read one tag starting at `<`. Returns the tag and the index just past `>`,
/// or `None` when no well-formed tag starts here.
fn parse_tag(input: &str, start: usize) -> Option<(ParsedTag, usize)> {
    let bytes = input.as_bytes();
    let mut idx = start + 1;
    let mut is_end = false;
    if bytes.get(idx) == Some(&b'/') {
        is_end = true;
        idx += 1;
    }

    let name_start = idx;
    while idx < bytes.len() && is_tag_name_byte(bytes[idx]) {
        idx += 1;
    }
    if idx == name_start {
        return None;
    }
    let name = input[name_start..idx].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;
    loop {
        idx = skip_spaces(bytes, idx);
        match bytes.get(idx).copied() {
            None => return None,
            Some(b'>') => return Some((ParsedTag { name, attrs, is_end, self_closing }, idx + 1)),
            Some(b'/') => {
                self_closing = true;
                idx += 1;
            }
            Some(_) => {
                let attr_start = idx;
                while idx < bytes.len()
                    && !bytes[idx].is_ascii_whitespace()
                    && !matches!(bytes[idx], b'=' | b'>' | b'/')
                {
                    idx += 1;
                }
                if idx == attr_start {
                    // Junk byte where an attribute name should be.
                    idx += 1;
                    continue;
                }
                let attr_name = input[attr_start..idx].to_ascii_lowercase();
                let after_name = skip_spaces(bytes, idx);
                if bytes.get(after_name) == Some(&b'=') {
                    let (value, next) = parse_attr_value(input, skip_spaces(bytes, after_name + 1));
                    attrs.push((attr_name, value));
                    idx = next;
                } else {
                    attrs.push((attr_name, String::new()));
                }
            }
        }
    }
}

fn parse_attr_value(input: &str, start: usize) -> (String, usize) {
    let bytes = input.as_bytes();
    match bytes.get(start).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            let value_start = start + 1;
            let value_end = find_byte(bytes, value_start, quote).unwrap_or(bytes.len());
            (
                input[value_start..value_end].to_string(),
                (value_end + 1).min(bytes.len()),
            )
        }
        _ => {
            let mut idx = start;
            while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && bytes[idx] != b'>' {
                idx += 1;
            }
            (input[start..idx].to_string(), idx)
        }
    }
}

/// Pop the open-element stack through the nearest matching tag. Unmatched
/// end tags are ignored, as a browser fragment parser ignores them.
fn close_open_element(dom: &FragmentDom, open: &mut Vec<NodeId>, name: &str) {
    let found = open
        .iter()
        .rposition(|id| dom.tag(*id).is_some_and(|t| t == name));
    if let Some(pos) = found {
        open.truncate(pos);
    }
}

/// Comment content plus the index past `-->` (or end of input if unterminated).
fn read_comment(input: &str, start: usize) -> (&str, usize) {
    let content_start = start + 4;
    match input[content_start..].find("-->") {
        Some(offset) => (
            &input[content_start..content_start + offset],
            content_start + offset + 3,
        ),
        None => (&input[content_start..], input.len()),
    }
}

/// Raw text content up to the matching end tag, plus the index past that tag.
fn read_raw_text<'a>(input: &'a str, start: usize, tag_name: &str) -> (&'a str, usize) {
    let bytes = input.as_bytes();
    let closer = format!("</{tag_name}");
    let lower = input.to_ascii_lowercase();
    let mut idx = start;
    while let Some(offset) = lower[idx..].find(closer.as_str()) {
        let at = idx + offset;
        if let Some((tag, after)) = parse_tag(input, at) {
            if tag.is_end && tag.name == tag_name {
                return (&input[start..at], after);
            }
        }
        idx = at + 1;
    }
    (&input[start..], bytes.len())
}

fn is_tag_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':')
}

fn skip_spaces(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
        idx += 1;
    }
    idx
}

fn skip_to_gt(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() {
        if bytes[idx] == b'>' {
            return idx + 1;
        }
        idx += 1;
    }
    bytes.len()
}

fn starts_with(bytes: &[u8], idx: usize, pattern: &[u8]) -> bool {
    bytes.len() >= idx + pattern.len() && &bytes[idx..idx + pattern.len()] == pattern
}

fn find_byte(bytes: &[u8], from: usize, byte: u8) -> Option<usize> {
    bytes[from..].iter().position(|b| *b == byte).map(|offset| from + offset)
}
