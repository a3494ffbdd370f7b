//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning `Network` errors,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures split into exactly two shapes. `Status` means the server
//! answered with a non-success code; `Network` means the request never
//! completed (connection failure, serialization, unparseable body). The
//! chat widget maps the two onto different fallback paths, so the split is
//! part of the contract rather than a convenience.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{ChatReply, ChatRequest, ContactRequest};
use super::types::{ReplyMessage, WireMessage};

/// Chat proxy endpoint.
pub const CHAT_ENDPOINT: &str = "/api/chat";
/// Contact email endpoint.
pub const CONTACT_ENDPOINT: &str = "/api/contact";
/// Resume download endpoint; linked directly from the hero section.
pub const RESUME_ENDPOINT: &str = "/api/download-resume";

/// Failure modes for an API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request never completed.
    Network(String),
}

/// POST the draft message plus prior history to the chat proxy.
///
/// # Errors
///
/// `ApiError::Status` for a handled non-2xx response, `ApiError::Network`
/// when the request or response handling fails.
pub async fn post_chat(
    message: &str,
    history: Vec<WireMessage>,
) -> Result<ReplyMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { message: message.to_owned(), messages: history };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let reply: ChatReply = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(reply.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, history);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST the contact form to the email endpoint.
///
/// # Errors
///
/// `ApiError::Status` for a handled non-2xx response, `ApiError::Network`
/// when the request itself fails.
pub async fn post_contact(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        };
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, subject, message);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
