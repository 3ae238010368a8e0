//! Deck routes — REST handlers over the in-memory deck store.
//!
//! ERROR HANDLING
//! ==============
//! Service and generator errors map to HTTP statuses in one place
//! (`ApiError`). An LLM edit that fails leaves the slide's prior content
//! untouched: the new fragment is only written back after the call returns.

#[cfg(test)]
#[path = "decks_test.rs"]
mod decks_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use canvas::slide::Slide;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::llm::config::{DEFAULT_SLIDE_COUNT, DEFAULT_TONE};
use crate::llm::types::LlmError;
use crate::services::deck::{Deck, DeckError};
use crate::services::export;
use crate::state::AppState;

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("slide generation is not configured")]
    GeneratorUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Deck(DeckError::NotFound(_) | DeckError::SlideNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Deck(DeckError::LastSlide) => StatusCode::CONFLICT,
            Self::GeneratorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            // Retryable upstream failures read as a bad gateway; a response we
            // could not interpret is our problem, not the caller's retry cue.
            Self::Llm(e) if e.retryable() => StatusCode::BAD_GATEWAY,
            Self::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckRequest {
    pub topic: String,
    pub slide_count: Option<u32>,
    pub tone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlideRequest {
    /// New fragment markup — the canvas mutation sink's write-back.
    pub html_content: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditSlideRequest {
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDeckRequest {
    /// New current-slide index (clamped to the deck bounds).
    pub current: usize,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Create a deck. A non-empty topic is sent to the generator; an empty topic
/// yields the built-in welcome deck without touching the generator at all.
pub async fn create_deck(
    State(state): State<AppState>,
    Json(req): Json<CreateDeckRequest>,
) -> Result<Json<Deck>, ApiError> {
    let topic = req.topic.trim();
    let deck = if topic.is_empty() {
        Deck::new("", Vec::new())
    } else {
        let Some(generator) = state.generator.clone() else {
            return Err(ApiError::GeneratorUnavailable);
        };
        let count = req.slide_count.unwrap_or(DEFAULT_SLIDE_COUNT);
        let tone = req.tone.unwrap_or_else(|| DEFAULT_TONE.to_string());
        let slides = generator.generate(topic, count, &tone).await?;
        Deck::new(topic, slides)
    };

    info!(deck_id = %deck.id, slides = deck.slides.len(), "deck created");
    state.decks.write().await.insert(deck.id, deck.clone());
    Ok(Json(deck))
}

pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deck>, ApiError> {
    let decks = state.decks.read().await;
    let deck = decks.get(&id).ok_or(DeckError::NotFound(id))?;
    Ok(Json(deck.clone()))
}

/// Clamped current-index navigation: editor selection and playback both
/// land here.
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDeckRequest>,
) -> Result<Json<Deck>, ApiError> {
    let mut decks = state.decks.write().await;
    let deck = decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
    deck.set_current(req.current);
    if let Some(slide) = deck.current_slide() {
        info!(deck_id = %id, slide_id = %slide.id, "current slide changed");
    }
    Ok(Json(deck.clone()))
}

/// Insert a blank slide after the deck's current one and select it.
pub async fn add_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Slide>, ApiError> {
    let mut decks = state.decks.write().await;
    let deck = decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
    let slide = deck.add_blank_slide().clone();
    info!(deck_id = %id, slide_id = %slide.id, "slide added");
    Ok(Json(slide))
}

/// The mutation sink's landing point (`htmlContent`) and the notes editor.
pub async fn update_slide(
    State(state): State<AppState>,
    Path((id, slide_id)): Path<(Uuid, String)>,
    Json(req): Json<UpdateSlideRequest>,
) -> Result<StatusCode, ApiError> {
    let mut decks = state.decks.write().await;
    let deck = decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
    if let Some(html) = req.html_content {
        deck.update_html(&slide_id, html)?;
    }
    if let Some(notes) = req.notes {
        deck.update_notes(&slide_id, notes)?;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_slide(
    State(state): State<AppState>,
    Path((id, slide_id)): Path<(Uuid, String)>,
) -> Result<StatusCode, ApiError> {
    let mut decks = state.decks.write().await;
    let deck = decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
    deck.remove_slide(&slide_id)?;
    info!(deck_id = %id, %slide_id, "slide deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// LLM-backed rewrite of one slide. The provider call runs without holding
/// the deck lock; on any failure the prior fragment stays in place.
pub async fn edit_slide(
    State(state): State<AppState>,
    Path((id, slide_id)): Path<(Uuid, String)>,
    Json(req): Json<EditSlideRequest>,
) -> Result<Json<Slide>, ApiError> {
    let Some(generator) = state.generator.clone() else {
        return Err(ApiError::GeneratorUnavailable);
    };

    let current = {
        let decks = state.decks.read().await;
        let deck = decks.get(&id).ok_or(DeckError::NotFound(id))?;
        deck.slides
            .iter()
            .find(|s| s.id == slide_id)
            .ok_or_else(|| DeckError::SlideNotFound(slide_id.clone()))?
            .html_content
            .clone()
    };

    let new_html = generator.edit(&current, &req.instruction).await?;

    let mut decks = state.decks.write().await;
    let deck = decks.get_mut(&id).ok_or(DeckError::NotFound(id))?;
    deck.update_html(&slide_id, new_html)?;
    let slide = deck
        .slides
        .iter()
        .find(|s| s.id == slide_id)
        .ok_or_else(|| DeckError::SlideNotFound(slide_id.clone()))?
        .clone();
    info!(deck_id = %id, %slide_id, "slide edited");
    Ok(Json(slide))
}

/// Scaled read-only preview markup for the sidebar.
pub async fn slide_thumbnail(
    State(state): State<AppState>,
    Path((id, slide_id)): Path<(Uuid, String)>,
) -> Result<Html<String>, ApiError> {
    let decks = state.decks.read().await;
    let deck = decks.get(&id).ok_or(DeckError::NotFound(id))?;
    let slide = deck
        .slides
        .iter()
        .find(|s| s.id == slide_id)
        .ok_or_else(|| DeckError::SlideNotFound(slide_id.clone()))?;
    Ok(Html(export::thumbnail_markup(slide)))
}

/// The whole deck as a standalone HTML player document.
pub async fn export_deck(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let decks = state.decks.read().await;
    let deck = decks.get(&id).ok_or(DeckError::NotFound(id))?;
    Ok(Html(export::standalone_document(&deck.topic, &deck.slides)))
}
