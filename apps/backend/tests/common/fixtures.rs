//! Request bodies for integration tests.

use serde_json::json;

/// Reward message ids in the catalog.
pub const REWARD_IDS: [u32; 12] = [1, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44];

/// A non-reward message id.
pub const AFFIRMATION_ID: u32 = 2;

/// Create a send-notification request body.
pub fn send_notification_request(
    token: Option<&str>,
    title: Option<&str>,
    body: Option<&str>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(t) = token {
        obj.insert("registrationToken".to_string(), json!(t));
    }
    if let Some(t) = title {
        obj.insert("title".to_string(), json!(t));
    }
    if let Some(b) = body {
        obj.insert("body".to_string(), json!(b));
    }
    serde_json::Value::Object(obj)
}

/// Create a token registration request body.
pub fn register_token_request(token: &str) -> serde_json::Value {
    json!({ "token": token })
}
