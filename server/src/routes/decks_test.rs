use std::sync::Arc;

use async_trait::async_trait;
use axum::response::IntoResponse;

use super::*;
use crate::llm::types::SlideGenerator;

// =============================================================
// Helpers
// =============================================================

struct MockGenerator;

#[async_trait]
impl SlideGenerator for MockGenerator {
    async fn generate(&self, topic: &str, count: u32, _tone: &str) -> Result<Vec<Slide>, LlmError> {
        Ok((1..=count)
            .map(|i| Slide::new(format!("gen-{i}"), format!("<h1>{topic} {i}</h1>")))
            .collect())
    }

    async fn edit(&self, _html: &str, instruction: &str) -> Result<String, LlmError> {
        Ok(format!("<p>{instruction}</p>"))
    }
}

struct FailingGenerator;

#[async_trait]
impl SlideGenerator for FailingGenerator {
    async fn generate(&self, _topic: &str, _count: u32, _tone: &str) -> Result<Vec<Slide>, LlmError> {
        Err(LlmError::ApiRequest("connection refused".into()))
    }

    async fn edit(&self, _html: &str, _instruction: &str) -> Result<String, LlmError> {
        Err(LlmError::ApiRequest("connection refused".into()))
    }
}

fn state_with(generator: Option<Arc<dyn SlideGenerator>>) -> AppState {
    AppState::new(generator)
}

fn create_request(topic: &str) -> CreateDeckRequest {
    CreateDeckRequest { topic: topic.into(), slide_count: None, tone: None }
}

async fn make_deck(state: &AppState, topic: &str) -> Deck {
    create_deck(State(state.clone()), Json(create_request(topic)))
        .await
        .expect("deck created")
        .0
}

// =============================================================
// Deck creation
// =============================================================

#[tokio::test]
async fn create_deck_generates_requested_slides() {
    let state = state_with(Some(Arc::new(MockGenerator)));
    let deck = create_deck(
        State(state.clone()),
        Json(CreateDeckRequest { topic: "Rust".into(), slide_count: Some(3), tone: None }),
    )
    .await
    .expect("deck created")
    .0;

    assert_eq!(deck.slides.len(), 3);
    assert!(deck.slides[0].html_content.contains("Rust"));
    assert!(state.decks.read().await.contains_key(&deck.id));
}

#[tokio::test]
async fn empty_topic_yields_the_welcome_deck_without_a_generator() {
    let state = state_with(None);
    let deck = make_deck(&state, "   ").await;
    assert_eq!(deck.slides.len(), 1);
    assert!(deck.slides[0].html_content.contains("Welcome"));
}

#[tokio::test]
async fn generation_without_a_generator_is_unavailable() {
    let state = state_with(None);
    let err = create_deck(State(state), Json(create_request("Rust")))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ApiError::GeneratorUnavailable));
}

#[tokio::test]
async fn generator_failure_propagates() {
    let state = state_with(Some(Arc::new(FailingGenerator)));
    let err = create_deck(State(state.clone()), Json(create_request("Rust")))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ApiError::Llm(_)));
    assert!(state.decks.read().await.is_empty());
}

// =============================================================
// Slide CRUD
// =============================================================

#[tokio::test]
async fn get_deck_returns_stored_deck() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let fetched = get_deck(State(state), Path(deck.id)).await.expect("found").0;
    assert_eq!(fetched.id, deck.id);
}

#[tokio::test]
async fn get_unknown_deck_is_not_found() {
    let state = state_with(None);
    let err = get_deck(State(state), Path(Uuid::new_v4())).await.expect_err("must fail");
    assert!(matches!(err, ApiError::Deck(DeckError::NotFound(_))));
}

#[tokio::test]
async fn update_deck_navigates_with_clamping() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    add_slide(State(state.clone()), Path(deck.id)).await.expect("added");

    let updated = update_deck(
        State(state.clone()),
        Path(deck.id),
        Json(UpdateDeckRequest { current: 99 }),
    )
    .await
    .expect("updated")
    .0;
    assert_eq!(updated.current, 1);
}

#[tokio::test]
async fn thumbnail_wraps_the_slide_fragment() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let slide_id = deck.slides[0].id.clone();

    let Html(markup) = slide_thumbnail(State(state), Path((deck.id, slide_id)))
        .await
        .expect("thumbnail");
    assert!(markup.contains("scale(0.2)"));
    assert!(markup.contains(&deck.slides[0].html_content));
}

#[tokio::test]
async fn add_slide_appends_and_selects() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let slide = add_slide(State(state.clone()), Path(deck.id)).await.expect("added").0;

    let decks = state.decks.read().await;
    let stored = decks.get(&deck.id).expect("deck stored");
    assert_eq!(stored.slides.len(), 2);
    assert_eq!(stored.current, 1);
    assert_eq!(stored.slides[1].id, slide.id);
}

#[tokio::test]
async fn update_slide_lands_the_mutation_sink_output() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let slide_id = deck.slides[0].id.clone();

    let status = update_slide(
        State(state.clone()),
        Path((deck.id, slide_id.clone())),
        Json(UpdateSlideRequest {
            html_content: Some(r#"<p style="position: relative; left: 40px;">moved</p>"#.into()),
            notes: None,
        }),
    )
    .await
    .expect("updated");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let decks = state.decks.read().await;
    let stored = decks.get(&deck.id).expect("deck stored");
    assert!(stored.slides[0].html_content.contains("left: 40px;"));
}

#[tokio::test]
async fn delete_last_slide_conflicts() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let slide_id = deck.slides[0].id.clone();

    let err = delete_slide(State(state), Path((deck.id, slide_id)))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ApiError::Deck(DeckError::LastSlide)));
}

#[tokio::test]
async fn delete_slide_removes_it() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    add_slide(State(state.clone()), Path(deck.id)).await.expect("added");

    let slide_id = deck.slides[0].id.clone();
    let status = delete_slide(State(state.clone()), Path((deck.id, slide_id.clone())))
        .await
        .expect("deleted");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let decks = state.decks.read().await;
    assert!(!decks.get(&deck.id).expect("deck stored").slides.iter().any(|s| s.id == slide_id));
}

// =============================================================
// LLM edit
// =============================================================

#[tokio::test]
async fn edit_slide_applies_the_new_fragment() {
    let state = state_with(Some(Arc::new(MockGenerator)));
    let deck = make_deck(&state, "").await;
    let slide_id = deck.slides[0].id.clone();

    let slide = edit_slide(
        State(state.clone()),
        Path((deck.id, slide_id)),
        Json(EditSlideRequest { instruction: "make it red".into() }),
    )
    .await
    .expect("edited")
    .0;

    assert_eq!(slide.html_content, "<p>make it red</p>");
}

#[tokio::test]
async fn failed_edit_leaves_prior_content_untouched() {
    let state = state_with(Some(Arc::new(FailingGenerator)));
    let deck = make_deck(&state, "").await;
    let slide_id = deck.slides[0].id.clone();
    let before = deck.slides[0].html_content.clone();

    let err = edit_slide(
        State(state.clone()),
        Path((deck.id, slide_id)),
        Json(EditSlideRequest { instruction: "anything".into() }),
    )
    .await
    .expect_err("must fail");
    assert!(matches!(err, ApiError::Llm(_)));

    let decks = state.decks.read().await;
    assert_eq!(decks.get(&deck.id).expect("deck stored").slides[0].html_content, before);
}

// =============================================================
// Export
// =============================================================

#[tokio::test]
async fn export_returns_a_standalone_document() {
    let state = state_with(None);
    let deck = make_deck(&state, "").await;
    let Html(doc) = export_deck(State(state), Path(deck.id)).await.expect("exported");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(&deck.slides[0].html_content));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn api_errors_map_to_expected_statuses() {
    let cases: Vec<(ApiError, StatusCode)> = vec![
        (ApiError::Deck(DeckError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND),
        (ApiError::Deck(DeckError::SlideNotFound("x".into())), StatusCode::NOT_FOUND),
        (ApiError::Deck(DeckError::LastSlide), StatusCode::CONFLICT),
        (ApiError::GeneratorUnavailable, StatusCode::SERVICE_UNAVAILABLE),
        (ApiError::Llm(LlmError::ApiRequest("x".into())), StatusCode::BAD_GATEWAY),
        (ApiError::Llm(LlmError::ApiParse("x".into())), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, expected) in cases {
        assert_eq!(err.into_response().status(), expected);
    }
}
