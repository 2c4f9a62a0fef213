//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from daily-core
pub use daily_core::{Category, MessageId, MessageRecord, Resolution};

// === Today ===

/// GET /api/today response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date: NaiveDate,
    pub days_together: u32,
    pub resolution: Resolution,
    pub special: bool,
    pub message: &'static MessageRecord,
    pub claimed: bool,
    pub redeemed: bool,
    pub unredeemed_count: usize,
    pub last_opened: DateTime<Utc>,
}

// === Catalog ===

/// GET /api/messages query
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesQuery {
    pub category: Option<String>,
    pub up_to_day: Option<u32>,
}

// === Rewards ===

/// Unredeemed reward listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsResponse {
    pub rewards: Vec<&'static MessageRecord>,
    pub count: usize,
}

/// Claimed reward ids
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedRewardsResponse {
    pub claimed: Vec<MessageId>,
}

/// Claim mutation result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: MessageId,
    pub claimed: bool,
    pub changed: bool,
}

/// Redeem mutation result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    pub id: MessageId,
    pub redeemed: bool,
    pub changed: bool,
}

// === State ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub reset: bool,
}

// === Notifications ===

/// POST /api/notifications/token request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTokenResponse {
    pub registered: bool,
}

/// POST /api/send-notification request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    #[serde(default, alias = "token")]
    pub registration_token: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Notification dispatch outcome
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SendNotificationResponse {
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            error: None,
            details: None,
        }
    }

    pub fn failed(error: &str, details: String) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.to_string()),
            details: Some(details),
        }
    }
}
