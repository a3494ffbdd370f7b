//! Completion types — provider-neutral messages and errors.
//!
//! Shared by the Anthropic and `OpenAI` clients, plus the `CompletionChat`
//! trait the assistant service mocks in tests.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by completion client operations.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGES
// =============================================================================

/// One conversation turn, already mapped to provider roles
/// (`"user"` / `"assistant"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// A parsed completion, provider differences erased.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Concatenated text content. May be empty when the provider stopped
    /// without emitting text; callers decide how to handle that.
    pub content: String,
    /// Model that actually served the request, as reported by the provider.
    pub model: String,
    /// Normalized stop reason (`"end_turn"` or `"max_tokens"`).
    pub stop_reason: String,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Provider-neutral async trait for chat completions. Enables mocking in
/// tests via `Arc<dyn CompletionChat>`.
#[async_trait::async_trait]
pub trait CompletionChat: Send + Sync {
    /// Send a conversation to the provider and return its completion.
    ///
    /// # Errors
    ///
    /// Returns a [`CompletionError`] if the request fails, the response is
    /// malformed, or the provider answers with a non-success status.
    async fn complete(
        &self,
        max_tokens: u32,
        temperature: f32,
        system: &str,
        messages: &[Message],
    ) -> Result<Completion, CompletionError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
