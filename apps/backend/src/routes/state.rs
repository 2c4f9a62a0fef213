//! Persisted state endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::ResetResponse;
use crate::AppState;

/// GET /api/state
/// Returns the stored state, or null before the first visit
pub async fn get_state(State(state): State<AppState>) -> Result<Json<Option<daily_core::AppState>>> {
    Ok(Json(state.engine()?.state()))
}

/// DELETE /api/state
pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    state.engine()?.reset();
    Ok(Json(ResetResponse { reset: true }))
}
