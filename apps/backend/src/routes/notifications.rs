//! Push notification endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::push::{PushMessage, PushSender};
use crate::AppState;

const DEFAULT_TITLE: &str = "iAlwaysCare 💕";
const DEFAULT_BODY: &str = "Your daily message is waiting for you!";

async fn dispatch(
    push: &dyn PushSender,
    message: PushMessage,
) -> (StatusCode, Json<SendNotificationResponse>) {
    match push.send(&message).await {
        Ok(message_id) => {
            tracing::info!("Notification sent: {}", message_id);
            (StatusCode::OK, Json(SendNotificationResponse::sent(message_id)))
        }
        Err(e) => {
            tracing::error!("Error sending notification: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendNotificationResponse::failed(
                    "Failed to send notification",
                    e.to_string(),
                )),
            )
        }
    }
}

/// POST /api/notifications/token
/// Stores the device registration token used by the cron trigger
pub async fn register_token(
    State(state): State<AppState>,
    Json(request): Json<RegisterTokenRequest>,
) -> Result<Json<RegisterTokenResponse>> {
    let token = request.token.trim();
    if token.is_empty() {
        return Err(ApiError::BadRequest("Empty registration token".to_string()));
    }

    state.engine()?.store().set_fcm_token(token)?;
    tracing::info!("Registered push token");

    Ok(Json(RegisterTokenResponse { registered: true }))
}

/// POST /api/send-notification
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<(StatusCode, Json<SendNotificationResponse>)> {
    let token = request
        .registration_token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("No FCM token provided".to_string()))?;

    let message = PushMessage {
        token,
        title: request.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        body: request.body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
    };

    Ok(dispatch(state.push.as_ref(), message).await)
}

/// GET /api/cron
/// Sends the daily reminder to the registered device
pub async fn cron(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SendNotificationResponse>)> {
    let stored = state.engine()?.store().fcm_token()?;
    let token = stored
        .or_else(|| state.config.fcm_token.clone())
        .ok_or_else(|| ApiError::Config("FCM token not configured".to_string()))?;

    let message = PushMessage {
        token,
        title: state.config.reminder_title.clone(),
        body: state.config.reminder_body.clone(),
    };

    tracing::info!("Sending daily reminder");
    Ok(dispatch(state.push.as_ref(), message).await)
}
