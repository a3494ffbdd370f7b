//! Contact mail service — delivers contact-form submissions via Resend.
//!
//! DESIGN
//! ======
//! One HTML template with `{{PLACEHOLDER}}` substitution; user-provided
//! values are HTML-escaped before they enter the template. Delivery is a
//! single call, no retry; failures collapse to a generic message at the
//! route layer so nothing about the mail setup leaks to visitors.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Resend configuration read once at startup.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    /// Verified sender address.
    pub from: String,
    /// Where contact submissions land.
    pub to: String,
}

impl MailConfig {
    /// Read `RESEND_API_KEY`, `CONTACT_FROM_EMAIL` and `CONTACT_TO_EMAIL`.
    /// `None` when any of them is unset; the caller leaves the contact
    /// endpoint disabled in that case.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        let from = std::env::var("CONTACT_FROM_EMAIL").ok()?;
        let to = std::env::var("CONTACT_TO_EMAIL").ok()?;
        Some(Self { api_key, from, to })
    }
}

/// A validated contact-form submission. Fields are non-blank by the time
/// the route constructs this.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Minimal HTML escaping for values interpolated into the template.
#[must_use]
pub fn html_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn render_contact_template(submission: &ContactSubmission) -> String {
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &html_escape(&submission.name))
        .replace("{{EMAIL}}", &html_escape(&submission.email))
        .replace("{{SUBJECT}}", &html_escape(&submission.subject))
        .replace("{{MESSAGE}}", &html_escape(&submission.message))
}

/// Send one contact email. Exactly one delivery attempt.
///
/// # Errors
///
/// [`MailError::Delivery`] when Resend rejects or the request fails.
pub async fn send_contact_email(config: &MailConfig, submission: &ContactSubmission) -> Result<(), MailError> {
    let resend = Resend::new(&config.api_key);
    let to = [config.to.as_str()];
    let subject = format!("Portfolio contact: {}", submission.subject);
    let html = render_contact_template(submission);

    let email = CreateEmailBaseOptions::new(&config.from, to, subject)
        .with_html(&html)
        .with_reply(&submission.email);
    resend
        .emails
        .send(email)
        .await
        .map_err(|e| MailError::Delivery(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
