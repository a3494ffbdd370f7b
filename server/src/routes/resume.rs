//! Resume proxy route — `GET /api/download-resume`.
//!
//! Streams the PDF from the configured source URL through to the client so
//! the hosting location never appears in the page. One fetch per request,
//! no caching.

use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::error;

use crate::state::AppState;

const ATTACHMENT_FILENAME: &str = "Tanvir-Hasan-Resume.pdf";

/// `GET /api/download-resume` — fetch the configured PDF and relay it as
/// an attachment download.
pub async fn download_resume(State(state): State<AppState>) -> Response {
    let Some(resume) = &state.resume else {
        error!("resume: source URL not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Server configuration error." })),
        )
            .into_response();
    };

    let response = match resume.fetch().await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "resume: upstream fetch failed");
            return fetch_failed();
        }
    };
    if !response.status().is_success() {
        error!(status = response.status().as_u16(), "resume: upstream non-success");
        return fetch_failed();
    }

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{ATTACHMENT_FILENAME}\""),
        ),
    ];
    (headers, Body::from_stream(response.bytes_stream())).into_response()
}

fn fetch_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to download resume." })),
    )
        .into_response()
}

#[cfg(test)]
#[path = "resume_test.rs"]
mod tests;
