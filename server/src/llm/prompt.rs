//! Prompt assembly and response extraction for slide generation.
//!
//! Pure text in, typed values out — everything here is testable without the
//! network. The extraction helpers are forgiving about markdown code fences
//! because models wrap JSON and HTML in them regardless of instructions.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use canvas::slide::Slide;

use super::types::LlmError;

/// System prompt for deck generation. The rules pin down the fragment
/// contract the canvas relies on: self-contained markup, inline styles,
/// editability markers, no outer document tags.
pub const GENERATION_SYSTEM_PROMPT: &str = "\
You are an expert presentation designer and front-end developer. \
Your task is to generate HTML code for presentation slides based on a topic.

Rules for HTML generation:
1. Each slide must be a self-contained HTML fragment suitable for placement inside a 16:9 aspect ratio container (approx 960px x 540px).
2. Use inline styles primarily for positioning and colors to ensure portability.
3. Use absolute positioning (position: absolute) for elements to allow for drag-and-drop editing later, or simple flexbox layouts.
4. Provide placeholder images from https://picsum.photos/400/300 if images are needed.
5. Ensure text contrast is accessible.
6. Do not include <html>, <head>, or <body> tags. Just the content div's inner HTML.
7. Mark editable elements with a data-editable attribute.

Return ONLY a JSON array where each object has an 'id' (unique string), \
'htmlContent' (string), and 'notes' (string for speaker notes).";

/// System prompt for single-slide edits.
pub const EDIT_SYSTEM_PROMPT: &str = "\
You are an expert presentation designer editing one slide of a deck. \
You receive the slide's current HTML fragment and an instruction. \
Apply the instruction while preserving the fragment contract: \
self-contained markup, inline styles, no outer <html>, <head>, or <body> tags. \
Return ONLY the new HTML fragment, with no commentary.";

#[must_use]
pub fn generation_user_prompt(topic: &str, count: u32, tone: &str) -> String {
    format!(
        "Create a {count}-slide presentation about \"{topic}\". \
         Make the design {tone}. Use a color palette that matches the topic."
    )
}

#[must_use]
pub fn edit_user_prompt(html: &str, instruction: &str) -> String {
    format!("Current slide HTML:\n{html}\n\nInstruction: {instruction}")
}

/// Parse the generation response into slides.
///
/// # Errors
///
/// Returns [`LlmError::ApiParse`] when the body is not a JSON slide array or
/// the array is empty.
pub fn extract_slides(raw: &str) -> Result<Vec<Slide>, LlmError> {
    let body = strip_code_fence(raw);
    let slides: Vec<Slide> =
        serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    if slides.is_empty() {
        return Err(LlmError::ApiParse("empty slide array".into()));
    }
    Ok(slides)
}

/// Parse the edit response into a bare HTML fragment.
///
/// # Errors
///
/// Returns [`LlmError::ApiParse`] when nothing remains after unwrapping.
pub fn extract_fragment(raw: &str) -> Result<String, LlmError> {
    let body = strip_code_fence(raw).trim();
    if body.is_empty() {
        return Err(LlmError::ApiParse("empty fragment".into()));
    }
    Ok(body.to_string())
}

/// Unwrap a ```lang ... ``` fence if present; otherwise return the trimmed
/// input unchanged.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "html", ...) up to the first newline.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
