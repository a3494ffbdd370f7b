//! Assistant service — system prompt, provider call, reply shaping.
//!
//! DESIGN
//! ======
//! The chat route hands the merged conversation to [`handle_chat`], which
//! maps wire roles onto provider roles, issues exactly one completion call
//! (no retry), trims the reply, and computes the contact-redirect flag by
//! substring match on the fixed fallback sentence. Reply ids come from a
//! process-wide monotonic counter seeded from the epoch-millis clock, so
//! two replies in the same millisecond still get distinct ids.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::info;

use crate::llm::types::{CompletionChat, CompletionError, Message};

/// Exact sentence the assistant is instructed to emit when a question falls
/// outside its knowledge. The redirect flag is a substring test against it.
pub const FALLBACK_SENTENCE: &str = "Sorry this is not available in our knowledge";

/// Output-length bound for every completion request.
pub const CHAT_MAX_TOKENS: u32 = 512;

/// Fixed sampling temperature for every completion request.
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Persona and behavioral rules sent as the system prompt on every request.
const SYSTEM_PROMPT: &str = "\
You are the portfolio assistant on Tanvir Hasan's personal website. Tanvir \
is a full-stack developer who started out as a civil engineer; lead with \
his current full-stack skills (Rust, Axum, Leptos, TypeScript, React, \
PostgreSQL) and mention the civil-engineering background only as the origin \
story, never as the headline.

Rules:
- You are an AI assistant. Never claim to be Tanvir or any human.
- Answer in concise markdown; short paragraphs and lists over walls of text.
- When the visitor asks about contacting, hiring, or working with Tanvir, \
include the markdown link [contact Tanvir](#contact) in your reply.
- If a question is outside your knowledge of Tanvir and his work, reply \
with this exact sentence and nothing else: \
\"Sorry this is not available in our knowledge\".";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("completion client not configured")]
    NotConfigured,
    #[error("completion API returned empty text")]
    EmptyCompletion,
    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),
}

/// Assistant reply as the chat endpoint serializes it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    pub id: u64,
    pub role: &'static str,
    pub content: String,
    pub should_redirect_to_contact: bool,
}

// =============================================================================
// REPLY IDS
// =============================================================================

/// Next reply id: epoch-millis seed plus a monotonic increment.
fn next_reply_id() -> u64 {
    static COUNTER: OnceLock<AtomicU64> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(0))
            .unwrap_or(0);
        AtomicU64::new(seed)
    });
    counter.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// ROLE MAPPING
// =============================================================================

/// Map a wire role onto the provider role vocabulary. The widget sends
/// `"user"` / `"ai"`; anything unrecognized is treated as user input.
fn map_wire_role(role: &str) -> &'static str {
    match role {
        "ai" | "assistant" => "assistant",
        _ => "user",
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run one chat turn against the completion provider.
///
/// `incoming` carries wire roles as received from the client; the last
/// entry is the new user message (the route validates non-emptiness).
///
/// # Errors
///
/// [`AssistantError::NotConfigured`] when no client is available,
/// [`AssistantError::EmptyCompletion`] when the provider returns only
/// whitespace, and [`AssistantError::Completion`] for provider failures.
pub async fn handle_chat(
    llm: Option<&Arc<dyn CompletionChat>>,
    incoming: &[Message],
) -> Result<ReplyMessage, AssistantError> {
    let llm = llm.ok_or(AssistantError::NotConfigured)?;

    let mapped: Vec<Message> = incoming
        .iter()
        .map(|m| Message { role: map_wire_role(&m.role).into(), content: m.content.clone() })
        .collect();

    let completion = llm
        .complete(CHAT_MAX_TOKENS, CHAT_TEMPERATURE, SYSTEM_PROMPT, &mapped)
        .await?;

    let content = completion.content.trim().to_string();
    if content.is_empty() {
        return Err(AssistantError::EmptyCompletion);
    }

    let should_redirect_to_contact = content.contains(FALLBACK_SENTENCE);
    info!(
        turns = incoming.len(),
        reply_len = content.len(),
        redirect = should_redirect_to_contact,
        stop_reason = %completion.stop_reason,
        "assistant: reply produced"
    );

    Ok(ReplyMessage { id: next_reply_id(), role: "ai", content, should_redirect_to_contact })
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
