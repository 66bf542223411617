//! Web form: paste, clean, and optionally ask Gemini.

mod handlers;
mod page;

use axum::{
    Router,
    routing::{get, post},
};
use copypaste_config::{CopyPasteConfig, CredentialContext};
use phrase_scrubber::PhraseScrubber;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

/// Shared server state. The credential context is the session cache for the
/// whole server process: a key supplied by one client is used for every
/// client until another key replaces it.
#[derive(Clone)]
pub struct AppState {
    scrubber: Arc<PhraseScrubber>,
    config: Arc<CopyPasteConfig>,
    credentials: Arc<Mutex<CredentialContext>>,
}

impl AppState {
    pub fn new(
        scrubber: PhraseScrubber,
        config: CopyPasteConfig,
        credentials: CredentialContext,
    ) -> Self {
        Self {
            scrubber: Arc::new(scrubber),
            config: Arc::new(config),
            credentials: Arc::new(Mutex::new(credentials)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/clean", post(handlers::clean))
        .route("/api/answer", post(handlers::answer))
        .route("/api/models", get(handlers::models))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
