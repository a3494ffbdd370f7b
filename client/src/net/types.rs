//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These mirror the JSON bodies of the three API endpoints exactly. Field
//! names that reach JavaScript-flavored consumers use camelCase on the wire
//! (`shouldRedirectToContact`); everything else is plain snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One conversation turn as the chat endpoint expects it.
/// `role` is `"user"` or `"ai"`; the server maps these for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Body for `POST /api/chat`: the new message plus prior history.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub messages: Vec<WireMessage>,
}

/// Successful chat response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub message: ReplyMessage,
}

/// The assistant reply inside a chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    pub id: u64,
    pub role: String,
    pub content: String,
    pub should_redirect_to_contact: bool,
}

/// Body for `POST /api/contact`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
