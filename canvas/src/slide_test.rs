use super::*;

#[test]
fn serializes_with_camel_case_field_names() {
    let slide = Slide::new("s1", "<p>x</p>");
    let json = serde_json::to_value(&slide).expect("serializes");
    assert_eq!(json["id"], "s1");
    assert_eq!(json["htmlContent"], "<p>x</p>");
    assert!(json.get("notes").is_none());
}

#[test]
fn deserializes_generator_output() {
    let json = r#"{"id":"intro","htmlContent":"<h1>Hi</h1>","notes":"opening"}"#;
    let slide: Slide = serde_json::from_str(json).expect("deserializes");
    assert_eq!(slide.id, "intro");
    assert_eq!(slide.html_content, "<h1>Hi</h1>");
    assert_eq!(slide.notes.as_deref(), Some("opening"));
}

#[test]
fn notes_are_optional_on_the_wire() {
    let json = r#"{"id":"a","htmlContent":"<p>b</p>"}"#;
    let slide: Slide = serde_json::from_str(json).expect("deserializes");
    assert!(slide.notes.is_none());
}

#[test]
fn round_trips_through_json() {
    let slide = Slide {
        id: "s2".into(),
        html_content: r#"<div style="left: 4px;">x</div>"#.into(),
        notes: Some("n".into()),
    };
    let json = serde_json::to_string(&slide).expect("serializes");
    let back: Slide = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, slide);
}
