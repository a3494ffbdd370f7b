//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Every external integration is optional: a missing credential disables
//! that endpoint (it fails closed per request with a generic message)
//! instead of preventing startup. Handlers never learn which variable was
//! missing, only that the integration is absent.

use std::sync::Arc;
use std::time::Duration;

use crate::llm::CompletionChat;
use crate::services::mail::MailConfig;

// =============================================================================
// RESUME CONFIG
// =============================================================================

const RESUME_REQUEST_TIMEOUT_SECS: u64 = 60;
const RESUME_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Source URL for the resume PDF proxied by `/api/download-resume`, plus the
/// shared client used to fetch it. Timeouts are explicit so a hung upstream
/// cannot hold the handler open indefinitely.
#[derive(Debug, Clone)]
pub struct ResumeConfig {
    pub file_url: String,
    http: reqwest::Client,
}

impl ResumeConfig {
    /// Build the config with one shared client for all resume fetches.
    /// `None` if the client cannot be constructed.
    #[must_use]
    pub fn new(file_url: String) -> Option<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(RESUME_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(RESUME_CONNECT_TIMEOUT_SECS))
            .build()
            .ok()?;
        Some(Self { file_url, http })
    }

    /// Read `RESUME_FILE_URL`; `None` leaves the resume endpoint disabled.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let file_url = std::env::var("RESUME_FILE_URL").ok()?;
        Self::new(file_url)
    }

    /// Fetch the configured PDF.
    pub async fn fetch(&self) -> Result<reqwest::Response, reqwest::Error> {
        self.http.get(&self.file_url).send().await
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional completion client. `None` if the chat env vars are not set.
    pub llm: Option<Arc<dyn CompletionChat>>,
    /// Optional Resend configuration for the contact endpoint.
    pub mail: Option<MailConfig>,
    /// Optional resume source for the download proxy.
    pub resume: Option<ResumeConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn CompletionChat>>, mail: Option<MailConfig>, resume: Option<ResumeConfig>) -> Self {
        Self { llm, mail, resume }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
