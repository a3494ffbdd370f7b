//! OpenAI-compatible API client.
//!
//! Thin HTTP wrapper for `{base}/chat/completions`. The base URL is
//! configurable so OpenAI-compatible gateways work unchanged.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::Timeouts;
use super::types::{Completion, CompletionError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeouts: Timeouts) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CompletionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        temperature: f32,
        system: &str,
        messages: &[Message],
    ) -> Result<Completion, CompletionError> {
        let msgs = build_messages(system, messages);
        let body = ApiRequest { model, max_tokens, temperature, messages: &msgs };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(CompletionError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: &'a [WireMessage],
}

#[derive(Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

/// The system prompt rides as a leading `system` message; a blank prompt
/// is omitted entirely.
fn build_messages(system: &str, messages: &[Message]) -> Vec<WireMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(WireMessage { role: "system".to_string(), content: system.to_string() });
    }
    for message in messages {
        out.push(WireMessage { role: message.role.clone(), content: message.content.clone() });
    }
    out
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_response(json_text: &str) -> Result<Completion, CompletionError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| CompletionError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(CompletionError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };
    let finish_reason = choice
        .get("finish_reason")
        .and_then(Value::as_str)
        .unwrap_or("stop");
    let content = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let stop_reason = if finish_reason == "length" { "max_tokens" } else { "end_turn" };
    Ok(Completion { content, model, stop_reason: stop_reason.to_string() })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
