//! Today's message endpoint

use axum::{extract::State, Json};
use daily_core::catalog;

use crate::error::{ApiError, Result};
use crate::models::{Resolution, TodayResponse};
use crate::AppState;

/// GET /api/today
/// Resolves today's message, advancing the stored state on a new day
pub async fn today(State(state): State<AppState>) -> Result<Json<TodayResponse>> {
    let now = state.clock.now();
    let today = state.engine()?.initialize_or_advance(now);

    let message = catalog::lookup(today.message_id)
        .ok_or_else(|| ApiError::NotFound(format!("Message {}", today.message_id)))?;

    Ok(Json(TodayResponse {
        date: today.date,
        days_together: today.state.days_together(today.date),
        resolution: today.resolution,
        special: today.resolution == Resolution::Special,
        message,
        claimed: today.state.is_claimed(message.id),
        redeemed: today.state.is_redeemed(message.id),
        unredeemed_count: today.state.unredeemed_rewards().len(),
        last_opened: today.state.last_opened,
    }))
}
