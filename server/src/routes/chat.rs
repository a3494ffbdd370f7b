//! Chat proxy route — `POST /api/chat`.
//!
//! ERROR TAXONOMY
//! ==============
//! 400 for client input errors (specific message), 500 generic for missing
//! configuration (never names the variable), 500 carrying the upstream
//! status/message for provider failures, 500 with a short diagnostic for
//! everything else including malformed request bodies. No retries; each
//! request is stateless.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::llm::types::{CompletionError, Message};
use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

/// Upstream provider bodies are relayed at most this many characters when
/// they are not parseable JSON.
const MAX_RELAYED_BODY_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// `POST /api/chat` — validate, delegate to the assistant service, shape
/// the response per the error taxonomy.
pub async fn chat(State(state): State<AppState>, body: Result<Json<ChatBody>, JsonRejection>) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "chat: malformed request body");
            return internal_error(rejection.body_text());
        }
    };

    let merged = merge_messages(body);
    if merged.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "No messages provided." }))).into_response();
    }
    // Merged list is non-empty here.
    if merged.last().is_none_or(|m| m.content.trim().is_empty()) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Empty message content." }))).into_response();
    }

    match assistant::handle_chat(state.llm.as_ref(), &merged).await {
        Ok(reply) => (StatusCode::OK, Json(json!({ "message": reply }))).into_response(),
        Err(AssistantError::NotConfigured) => {
            error!("chat: completion client not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server configuration error." })),
            )
                .into_response()
        }
        Err(AssistantError::EmptyCompletion) => {
            error!("chat: provider returned empty text");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Empty response from completion API." })),
            )
                .into_response()
        }
        Err(AssistantError::Completion(CompletionError::ApiResponse { status, body })) => {
            error!(status, "chat: upstream completion error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Completion API error.",
                    "details": { "status": status, "message": upstream_error_message(&body) },
                })),
            )
                .into_response()
        }
        Err(AssistantError::Completion(e)) => {
            error!(error = %e, "chat: request failed");
            internal_error(e.to_string())
        }
    }
}

fn internal_error(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to process chat request.", "details": details })),
    )
        .into_response()
}

/// Prior history first, then the new message (as a user turn) when present.
fn merge_messages(body: ChatBody) -> Vec<Message> {
    let mut merged = body.messages.unwrap_or_default();
    if let Some(message) = body.message {
        merged.push(Message { role: "user".into(), content: message });
    }
    merged
}

/// Extract a human-readable message from a provider error body: the JSON
/// `error.message` field when present, else the raw body truncated.
fn upstream_error_message(body: &str) -> String {
    if let Ok(root) = serde_json::from_str::<Value>(body) {
        if let Some(message) = root
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }
    }
    body.chars().take(MAX_RELAYED_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
