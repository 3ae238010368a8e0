//! Inline style handling: declaration lists, positioning keywords, pixel values.
//!
//! The `style` attribute is the only style channel the engine writes, so this
//! module keeps declarations as an ordered name/value list that survives a
//! parse → mutate → serialize cycle without reordering. Splitting respects
//! quotes and parentheses so `url(...)` and gradient values stay intact.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// CSS positioning scheme resolved for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Normal flow; `left`/`top` have no effect until upgraded.
    #[default]
    Static,
    /// Offset from the element's own flow position; its space stays reserved.
    Relative,
    /// Removed from flow, positioned against the nearest positioned ancestor.
    Absolute,
    /// Removed from flow, positioned against the viewport.
    Fixed,
}

impl Position {
    /// Parse a `position` keyword. Unknown keywords read as `static`.
    #[must_use]
    pub fn from_keyword(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "relative" => Self::Relative,
            "absolute" => Self::Absolute,
            "fixed" => Self::Fixed,
            _ => Self::Static,
        }
    }

    /// Whether the element no longer reserves space in normal flow.
    #[must_use]
    pub fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

/// Ordered inline `style` declaration list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parse a raw `style` attribute value. Malformed declarations (missing
    /// colon, empty name or value) are dropped, matching how a live style
    /// attribute swallows garbage.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut decls = Vec::new();
        for part in split_top_level(raw, ';') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }
            let Some(colon) = find_top_level_colon(trimmed) else {
                continue;
            };
            let name = trimmed[..colon].trim().to_ascii_lowercase();
            let value = trimmed[colon + 1..].trim().to_string();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            decls.push((name, value));
        }
        Self { decls }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration, replacing an existing one in place (keeping its
    /// position in the list) or appending.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(decl) = self.decls.iter_mut().find(|(n, _)| *n == name) {
            decl.1 = value.to_string();
        } else {
            self.decls.push((name, value.to_string()));
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.decls.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Serialize back to attribute form: `name: value;` segments joined by a
    /// space, the way a live style attribute reads back.
    #[must_use]
    pub fn to_attr(&self) -> String {
        self.decls
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolved positioning scheme; absent or unknown reads as `static`.
    #[must_use]
    pub fn position(&self) -> Position {
        self.get("position").map(Position::from_keyword).unwrap_or_default()
    }

    /// Pixel value of a declaration, `None` when absent or non-numeric
    /// (including `auto`).
    #[must_use]
    pub fn px(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(parse_px)
    }
}

/// Leading-number parse with host-platform `parseFloat` semantics: an
/// optional sign, digits, one dot; anything after the numeric prefix (such
/// as a `px` unit) is ignored. Returns `None` when no digits lead the value.
#[must_use]
pub fn parse_px(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0_usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    match s[..end].parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// True when the style paints the background through the text — the
/// gradient-heading trick (`background-clip: text`, with or without the
/// vendor prefix).
#[must_use]
pub fn clips_background_to_text(style: &InlineStyle) -> bool {
    ["background-clip", "-webkit-background-clip"]
        .iter()
        .any(|name| style.get(name).is_some_and(|v| v.eq_ignore_ascii_case("text")))
}

/// Split on `delimiter` at the top level only: quotes and parentheses
/// (gradient stops, `url(...)` data URIs) shield their contents.
fn split_top_level(input: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_u32;
    let mut quote: Option<char> = None;
    let mut start = 0_usize;
    for (idx, ch) in input.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if ch == delimiter && depth == 0 => {
                parts.push(&input[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// First `:` outside quotes and parentheses, separating name from value.
fn find_top_level_colon(input: &str) -> Option<usize> {
    let mut depth = 0_u32;
    let mut quote: Option<char> = None;
    for (idx, ch) in input.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}
