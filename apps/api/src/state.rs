use std::sync::Arc;

use crate::chat::engine::ChatEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the knowledge base, the rate-limit store and the generator client.
    pub engine: Arc<ChatEngine>,
}
