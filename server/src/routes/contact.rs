//! Contact route — `POST /api/contact`.
//!
//! The error bodies here use the `message` key, mirroring the success
//! shape, where chat and resume use `error`. That inconsistency is the
//! published surface; the form only shows a flat notice either way.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::services::mail::{self, ContactSubmission};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// `POST /api/contact` — validate all four fields, deliver via Resend.
/// A malformed body is treated the same as absent fields.
pub async fn contact(State(state): State<AppState>, body: Result<Json<ContactBody>, JsonRejection>) -> Response {
    let Ok(Json(body)) = body else {
        return missing_fields();
    };
    let Some(submission) = validate_contact(&body) else {
        return missing_fields();
    };

    let Some(config) = &state.mail else {
        error!("contact: mail integration not configured");
        return delivery_failed();
    };

    match mail::send_contact_email(config, &submission).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Email sent successfully" }))).into_response(),
        Err(e) => {
            error!(error = %e, "contact: delivery failed");
            delivery_failed()
        }
    }
}

fn missing_fields() -> Response {
    warn!("contact: submission rejected, missing fields");
    (StatusCode::BAD_REQUEST, Json(json!({ "message": "Missing required fields" }))).into_response()
}

fn delivery_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Failed to send email" })),
    )
        .into_response()
}

/// All four fields must be non-blank after trimming. Values are passed on
/// trimmed; escaping happens at the template layer.
fn validate_contact(body: &ContactBody) -> Option<ContactSubmission> {
    let name = body.name.trim();
    let email = body.email.trim();
    let subject = body.subject.trim();
    let message = body.message.trim();
    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return None;
    }
    Some(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
