use super::*;

const SLIDE_ARRAY: &str = r#"[
    {"id": "s1", "htmlContent": "<h1>One</h1>", "notes": "first"},
    {"id": "s2", "htmlContent": "<p>Two</p>"}
]"#;

// =============================================================
// extract_slides
// =============================================================

#[test]
fn extracts_a_plain_json_array() {
    let slides = extract_slides(SLIDE_ARRAY).expect("parses");
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].id, "s1");
    assert_eq!(slides[0].html_content, "<h1>One</h1>");
    assert_eq!(slides[0].notes.as_deref(), Some("first"));
    assert!(slides[1].notes.is_none());
}

#[test]
fn extracts_a_fenced_json_array() {
    let raw = format!("```json\n{SLIDE_ARRAY}\n```");
    let slides = extract_slides(&raw).expect("parses");
    assert_eq!(slides.len(), 2);
}

#[test]
fn empty_array_is_a_parse_error() {
    assert!(matches!(extract_slides("[]"), Err(LlmError::ApiParse(_))));
}

#[test]
fn prose_is_a_parse_error() {
    assert!(matches!(
        extract_slides("Here are your slides!"),
        Err(LlmError::ApiParse(_))
    ));
}

// =============================================================
// extract_fragment
// =============================================================

#[test]
fn fragment_passes_through_unfenced() {
    let html = extract_fragment("<div><p>x</p></div>").expect("parses");
    assert_eq!(html, "<div><p>x</p></div>");
}

#[test]
fn fragment_is_unwrapped_from_a_fence() {
    let html = extract_fragment("```html\n<div>y</div>\n```").expect("parses");
    assert_eq!(html, "<div>y</div>");
}

#[test]
fn empty_fragment_is_a_parse_error() {
    assert!(matches!(extract_fragment("   "), Err(LlmError::ApiParse(_))));
    assert!(matches!(extract_fragment("```html\n```"), Err(LlmError::ApiParse(_))));
}

// =============================================================
// Prompts
// =============================================================

#[test]
fn generation_prompt_includes_topic_count_and_tone() {
    let prompt = generation_user_prompt("Rust memory safety", 7, "bold");
    assert!(prompt.contains("7-slide"));
    assert!(prompt.contains("Rust memory safety"));
    assert!(prompt.contains("bold"));
}

#[test]
fn edit_prompt_carries_current_html_and_instruction() {
    let prompt = edit_user_prompt("<p>old</p>", "make the heading red");
    assert!(prompt.contains("<p>old</p>"));
    assert!(prompt.contains("make the heading red"));
}

#[test]
fn system_prompts_pin_the_fragment_contract() {
    assert!(GENERATION_SYSTEM_PROMPT.contains("data-editable"));
    assert!(GENERATION_SYSTEM_PROMPT.contains("htmlContent"));
    assert!(EDIT_SYSTEM_PROMPT.contains("ONLY the new HTML fragment"));
}
