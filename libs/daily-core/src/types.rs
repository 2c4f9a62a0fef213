//! Core types for the daily note application.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a catalog message (1..=45).
pub type MessageId = u32;

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Affirmation,
    Bond,
    Reward,
}

impl Category {
    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affirmation => "affirmation",
            Self::Bond => "bond",
            Self::Reward => "reward",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "affirmation" => Some(Self::Affirmation),
            "bond" => Some(Self::Bond),
            "reward" => Some(Self::Reward),
            _ => None,
        }
    }
}

/// A pre-written message from the compiled-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: MessageId,
    pub day: u32,
    pub category: Category,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_details: Option<&'static str>,
}

impl MessageRecord {
    pub fn is_reward(&self) -> bool {
        self.category == Category::Reward
    }
}

/// Persisted application state.
///
/// Serialized as a single camelCase JSON record. Fields added after the first
/// release carry serde defaults so older payloads still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default = "crate::calendar::relationship_start")]
    pub start_date: NaiveDateTime,
    /// Message shown per day, ordered by date. The no-repeat window covers
    /// the latest recorded dates, so entries written after a clock rollback
    /// sort by their date, not by when they were written.
    #[serde(default)]
    pub shown_messages: BTreeMap<NaiveDate, MessageId>,
    #[serde(default)]
    pub claimed_rewards: Vec<MessageId>,
    #[serde(default)]
    pub redeemed_rewards: Vec<MessageId>,
    #[serde(default = "Utc::now")]
    pub last_opened: DateTime<Utc>,
    #[serde(default)]
    pub today_message_id: Option<MessageId>,
}

/// How today's message was resolved by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Fixed-date override; not recorded in history.
    Special,
    /// Already decided earlier today.
    Existing,
    /// Newly selected and recorded.
    Selected,
}
