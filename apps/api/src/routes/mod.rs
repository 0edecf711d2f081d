pub mod health;
pub mod security_headers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat API
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/chat/topics", get(handlers::handle_topics))
        .route("/api/v1/chat/match", post(handlers::handle_match))
        .fallback(not_found)
        .layer(middleware::from_fn(
            security_headers::security_headers_middleware,
        ))
        .with_state(state)
}
