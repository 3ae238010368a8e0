//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the in-memory deck map and the optional slide generator. Decks live
//! for the process lifetime — there is no persistence layer, the deck map is
//! the only store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::llm::types::SlideGenerator;
use crate::services::deck::Deck;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub decks: Arc<RwLock<HashMap<Uuid, Deck>>>,
    pub generator: Option<Arc<dyn SlideGenerator>>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn SlideGenerator>>) -> Self {
        Self { decks: Arc::new(RwLock::new(HashMap::new())), generator }
    }
}
