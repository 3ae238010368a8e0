mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::types::SlideGenerator;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Generator is optional: without an API key the editor still serves
    // decks, only the generation/edit routes are disabled.
    let generator: Option<Arc<dyn SlideGenerator>> = match llm::client_from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "slide generator initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "slide generator not configured — generation disabled");
            None
        }
    };

    let state = state::AppState::new(generator);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "deckboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
