//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor frontend talks to this REST surface: deck generation and
//! retrieval, slide CRUD (including the canvas mutation sink's write-back),
//! LLM-backed slide edits, and standalone export.

pub mod decks;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// REST API router for the deck editor.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/deck", post(decks::create_deck))
        .route("/api/deck/{id}", get(decks::get_deck).patch(decks::update_deck))
        .route("/api/deck/{id}/slides", post(decks::add_slide))
        .route(
            "/api/deck/{id}/slides/{slide_id}",
            patch(decks::update_slide).delete(decks::delete_slide),
        )
        .route("/api/deck/{id}/slides/{slide_id}/edit", post(decks::edit_slide))
        .route(
            "/api/deck/{id}/slides/{slide_id}/thumbnail",
            get(decks::slide_thumbnail),
        )
        .route("/api/deck/{id}/export", get(decks::export_deck))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
