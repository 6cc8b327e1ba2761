//! # Chat Server Request Handlers
//!
//! File: cli/src/commands/srv/handlers.rs
//!
//! ## Overview
//!
//! - `POST /chat`: reads `{"mensagem": "..."}`, rejects empty messages with `400`
//!   and `{"categoria": "erro", "resposta": "Mensagem vazia."}`, otherwise replies
//!   `{"categoria": ..., "resposta": ...}`.
//! - `GET /`: serves the chat page from the template directory.
//!
//! A body that is not sent as JSON (`application/json` or `application/*+json`),
//! is not valid JSON, or lacks a string `mensagem` is treated as an empty message
//! rather than a malformed request.
//!
use crate::classifier::{require_message, Classifier};
use crate::core::error::EMPTY_MESSAGE_TEXT;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::{path::PathBuf, sync::Arc};
use tracing::{debug, warn};

/// Category reported for rejected messages.
pub const ERROR_CATEGORY: &str = "erro";

/// Shared, read-only state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub index_path: Arc<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
struct ChatRequest {
    #[serde(default)]
    mensagem: Option<String>,
}

/// `POST /chat`
pub async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request: ChatRequest = if is_json(&headers) {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            debug!("Unreadable chat body ({}), treating as empty message.", e);
            ChatRequest::default()
        })
    } else {
        debug!("Chat body is not JSON, treating as empty message.");
        ChatRequest::default()
    };
    let raw = request.mensagem.unwrap_or_default();

    match require_message(&raw) {
        Ok(message) => Json(state.classifier.classify(message)).into_response(),
        Err(_) => {
            debug!("Rejected empty chat message.");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "categoria": ERROR_CATEGORY,
                    "resposta": EMPTY_MESSAGE_TEXT,
                })),
            )
                .into_response()
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            warn!(
                "Could not read chat page '{}': {}",
                state.index_path.display(),
                e
            );
            (StatusCode::NOT_FOUND, "Chat page not found.").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("application/json; charset=utf-8")));
        assert!(is_json(&headers("Application/JSON")));
        assert!(is_json(&headers("application/vnd.api+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json(&HeaderMap::new()));
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json(&headers("text/json+plain")));
    }
}
