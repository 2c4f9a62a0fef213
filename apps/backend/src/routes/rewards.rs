//! Reward claim and redemption endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use daily_core::catalog;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn known_message(id: MessageId) -> Result<&'static MessageRecord> {
    catalog::lookup(id).ok_or_else(|| ApiError::NotFound(format!("Message {}", id)))
}

/// GET /api/rewards
/// Claimed rewards that have not been redeemed yet
pub async fn unredeemed(State(state): State<AppState>) -> Result<Json<RewardsResponse>> {
    let ids = state.engine()?.unredeemed_rewards();

    let rewards: Vec<&'static MessageRecord> = ids
        .into_iter()
        .filter_map(catalog::lookup)
        .filter(|m| m.is_reward())
        .collect();

    Ok(Json(RewardsResponse {
        count: rewards.len(),
        rewards,
    }))
}

/// GET /api/rewards/claimed
pub async fn claimed(State(state): State<AppState>) -> Result<Json<ClaimedRewardsResponse>> {
    let claimed = state.engine()?.claimed_rewards();
    Ok(Json(ClaimedRewardsResponse { claimed }))
}

/// POST /api/rewards/:id/claim
pub async fn claim(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
) -> Result<Json<ClaimResponse>> {
    let message = known_message(id)?;
    if !message.is_reward() {
        return Err(ApiError::BadRequest(format!(
            "Message {} is not a reward",
            id
        )));
    }

    let mut engine = state.engine()?;
    let changed = engine.claim(id);
    let claimed = engine.is_reward_claimed(id);

    Ok(Json(ClaimResponse {
        id,
        claimed,
        changed,
    }))
}

/// POST /api/rewards/:id/redeem
pub async fn redeem(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
) -> Result<Json<RedeemResponse>> {
    known_message(id)?;

    let mut engine = state.engine()?;
    let changed = engine.redeem(id);
    let redeemed = engine.is_reward_redeemed(id);

    Ok(Json(RedeemResponse {
        id,
        redeemed,
        changed,
    }))
}
