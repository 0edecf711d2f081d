//! Axum route handlers for the Chat API.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::chat::booking::{accepts_booking, BOOKING_ACCEPTED};
use crate::chat::knowledge_base::Topic;
use crate::errors::AppError;
use crate::models::conversation::ConversationMessage;
use crate::state::AppState;

/// Longest client id accepted as a rate-limit key.
const MAX_CLIENT_ID_CHARS: usize = 128;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub client_id: Option<String>,
    /// Text of the assistant message this question replies to, if any.
    pub previous_reply: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: ConversationMessage,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: &'static [Topic],
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Answers one visitor question. Always 200 with an assistant message unless
/// the request itself is malformed; engine failures arrive as reply text.
pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let client_id = resolve_client_id(request.client_id.as_deref(), &headers)?;

    if accepts_booking(&request.question, request.previous_reply.as_deref()) {
        let message = ConversationMessage::assistant(BOOKING_ACCEPTED).with_contact_button();
        return Ok(Json(ChatResponse { message }));
    }

    let text = state
        .engine
        .respond(&request.question, client_id.as_deref())
        .await;

    Ok(Json(ChatResponse {
        message: ConversationMessage::assistant(text),
    }))
}

/// GET /api/v1/chat/topics
pub async fn handle_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: state.engine.knowledge_base().suggested_topics(),
    })
}

/// POST /api/v1/chat/match
///
/// Offline keyword match against the knowledge base. Never calls the
/// generator and is not rate limited.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    Json(MatchResponse {
        answer: state.engine.best_match(&request.question).to_string(),
    })
}

/// Body `client_id`, else the first `X-Forwarded-For` hop, else `None`
/// (the engine's shared default bucket).
fn resolve_client_id(
    from_body: Option<&str>,
    headers: &HeaderMap,
) -> Result<Option<String>, AppError> {
    let candidate = from_body
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| {
            headers
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|ip| !ip.is_empty())
                .map(str::to_string)
        });

    if let Some(id) = &candidate {
        if id.chars().count() > MAX_CLIENT_ID_CHARS {
            return Err(AppError::Validation(format!(
                "client_id must be at most {MAX_CLIENT_ID_CHARS} characters"
            )));
        }
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_body_client_id_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        let id = resolve_client_id(Some("tab-7"), &headers).unwrap();
        assert_eq!(id.as_deref(), Some("tab-7"));
    }

    #[test]
    fn test_first_forwarded_hop_used_without_body_id() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        let id = resolve_client_id(Some("  "), &headers).unwrap();
        assert_eq!(id.as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn test_no_identity_means_default_bucket() {
        assert_eq!(resolve_client_id(None, &HeaderMap::new()).unwrap(), None);
    }

    #[test]
    fn test_oversized_client_id_rejected() {
        let long = "x".repeat(MAX_CLIENT_ID_CHARS + 1);
        let result = resolve_client_id(Some(&long), &HeaderMap::new());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
