//! Completion client configuration parsed from environment variables.

use super::types::CompletionError;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CHAT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl CompletionConfig {
    /// Build typed completion config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_PROVIDER`: `openai` (default) or `anthropic`
    /// - `CHAT_MODEL`: provider default when absent
    /// - `CHAT_BASE_URL`: base URL for OpenAI-compatible gateways
    /// - `CHAT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CHAT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// The API key is read from `OPENAI_API_KEY` or `ANTHROPIC_API_KEY`
    /// depending on the provider; a missing key is the signal the caller
    /// uses to leave the chat endpoint disabled.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::ConfigParse`] for an unknown provider and
    /// [`CompletionError::MissingApiKey`] when the key variable is unset.
    pub fn from_env() -> Result<Self, CompletionError> {
        let provider = parse_provider(std::env::var("CHAT_PROVIDER").ok().as_deref())?;

        let key_var = api_key_var(provider);
        let api_key = std::env::var(key_var).map_err(|_| CompletionError::MissingApiKey { var: key_var.into() })?;

        let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| default_model(provider).to_string());
        let base_url = std::env::var("CHAT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CHAT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = Timeouts {
            request_secs: env_parse_u64("CHAT_REQUEST_TIMEOUT_SECS", DEFAULT_CHAT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CHAT_CONNECT_TIMEOUT_SECS", DEFAULT_CHAT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, api_key, model, base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<ProviderKind, CompletionError> {
    match raw.unwrap_or("openai") {
        "openai" => Ok(ProviderKind::OpenAi),
        "anthropic" => Ok(ProviderKind::Anthropic),
        other => Err(CompletionError::ConfigParse(format!("unknown CHAT_PROVIDER: {other}"))),
    }
}

fn api_key_var(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::OpenAi => "OPENAI_API_KEY",
        ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
    }
}

fn default_model(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::OpenAi => "gpt-4o-mini",
        ProviderKind::Anthropic => "claude-3-5-haiku-latest",
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
