//! Sends a test notification through a running backend.
//!
//! Reads `FCM_TOKEN` and `APP_URL` (default http://localhost:3000) from the
//! environment or `.env`.

use anyhow::{bail, Context};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let token = std::env::var("FCM_TOKEN").context("FCM_TOKEN not set")?;
    let app_url = std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let url = format!("{}/api/send-notification", app_url.trim_end_matches('/'));

    let preview: String = token.chars().take(20).collect();
    tracing::info!("Testing notification to {}... via {}", preview, url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({
            "token": token,
            "title": "Test Notification 💕",
            "body": "This is a test notification from iAlwaysCare!",
        }))
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    let body: serde_json::Value = response.json().await.context("invalid response body")?;
    tracing::info!("Response ({}): {}", status, body);

    if body["success"].as_bool() != Some(true) {
        bail!("notification was not sent");
    }

    tracing::info!("Notification sent, message id {}", body["messageId"]);
    Ok(())
}
