//! Push notification delivery through FCM HTTP v1.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::FcmConfig;

const ICON: &str = "/icon-192.png";
const LINK: &str = "/";

#[derive(Debug, Error)]
pub enum PushError {
    #[error("push provider not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A notification addressed to one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushMessage {
    pub token: String,
    pub title: String,
    pub body: String,
}

/// Delivers notifications to registered devices.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Send one notification. Returns the provider's message id.
    async fn send(&self, message: &PushMessage) -> Result<String, PushError>;
}

#[derive(Deserialize)]
struct FcmResponse {
    name: String,
}

/// FCM HTTP v1 sender.
///
/// Uses a pre-issued OAuth access token; token refresh happens outside the
/// service.
pub struct FcmSender {
    client: reqwest::Client,
    config: FcmConfig,
}

impl FcmSender {
    pub fn new(config: FcmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.config.endpoint.trim_end_matches('/'),
            self.config.project_id
        )
    }
}

/// Request body for a single webpush notification.
pub fn fcm_payload(message: &PushMessage) -> serde_json::Value {
    json!({
        "message": {
            "token": message.token,
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "webpush": {
                "notification": {
                    "icon": ICON,
                    "badge": ICON,
                },
                "fcm_options": {
                    "link": LINK,
                },
            },
        }
    })
}

#[async_trait]
impl PushSender for FcmSender {
    async fn send(&self, message: &PushMessage) -> Result<String, PushError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.config.access_token)
            .json(&fcm_payload(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: FcmResponse = response.json().await?;
        Ok(parsed.name)
    }
}

/// Sender used when no push provider is configured.
pub struct DisabledSender;

#[async_trait]
impl PushSender for DisabledSender {
    async fn send(&self, _message: &PushMessage) -> Result<String, PushError> {
        Err(PushError::NotConfigured)
    }
}
