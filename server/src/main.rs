#![recursion_limit = "256"]

mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::CompletionChat;
use crate::services::mail::MailConfig;
use crate::state::ResumeConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Each integration is optional: a missing credential disables that
    // endpoint rather than preventing startup.
    let llm: Option<Arc<dyn CompletionChat>> = match llm::CompletionClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "completion client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "completion client not configured — chat disabled");
            None
        }
    };

    let mail = MailConfig::from_env();
    if mail.is_none() {
        tracing::warn!("mail integration not configured — contact form disabled");
    }

    let resume = ResumeConfig::from_env();
    if resume.is_none() {
        tracing::warn!("resume URL not configured — resume download disabled");
    }

    let state = state::AppState::new(llm, mail, resume);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "SSR unavailable — serving API and static assets only");
            routes::static_app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio server listening");
    axum::serve(listener, app).await.expect("server failed");
}
