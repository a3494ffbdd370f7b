//! Completion clients — multi-provider adapter for the chat proxy.
//!
//! DESIGN
//! ======
//! The `CompletionClient` enum dispatches to Anthropic or `OpenAI` based on
//! `CHAT_PROVIDER`. Routes and services depend only on the `CompletionChat`
//! trait so tests can substitute a mock.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use config::{CompletionConfig, ProviderKind};
pub use types::CompletionChat;
use types::{Completion, CompletionError, Message};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete completion client that dispatches to either Anthropic or OpenAI.
///
/// Configured from environment variables by [`CompletionClient::from_env`].
pub struct CompletionClient {
    inner: Provider,
    model: String,
}

enum Provider {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl CompletionClient {
    /// Build a completion client from environment variables.
    ///
    /// See [`CompletionConfig::from_env`] for the variables involved. A
    /// missing API key surfaces as [`CompletionError::MissingApiKey`]; the
    /// caller treats that as "chat disabled", not a startup failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the API key is
    /// missing, or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, CompletionError> {
        let config = CompletionConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a completion client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: CompletionConfig) -> Result<Self, CompletionError> {
        let model = config.model.clone();
        let inner = match config.provider {
            ProviderKind::Anthropic => {
                Provider::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.timeouts)?)
            }
            ProviderKind::OpenAi => {
                Provider::OpenAi(openai::OpenAiClient::new(config.api_key, config.base_url, config.timeouts)?)
            }
        };
        Ok(Self { inner, model })
    }

    /// Return the configured model name (e.g. `"gpt-4o-mini"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl CompletionChat for CompletionClient {
    async fn complete(
        &self,
        max_tokens: u32,
        temperature: f32,
        system: &str,
        messages: &[Message],
    ) -> Result<Completion, CompletionError> {
        match &self.inner {
            Provider::Anthropic(c) => {
                c.chat(&self.model, max_tokens, temperature, system, messages)
                    .await
            }
            Provider::OpenAi(c) => {
                c.chat(&self.model, max_tokens, temperature, system, messages)
                    .await
            }
        }
    }
}
