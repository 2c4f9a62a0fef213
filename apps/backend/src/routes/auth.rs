//! Cron trigger authentication middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, Result};
use crate::AppState;

/// Require `Authorization: Bearer <CRON_SECRET>`.
///
/// With no secret configured every request is rejected.
pub async fn cron_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let expected = state
        .config
        .cron_secret
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized("Cron secret not configured".to_string()))?;

    // Extract Bearer token
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

    if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        tracing::warn!("Rejected cron request with invalid secret");
        return Err(ApiError::Unauthorized("Invalid cron secret".to_string()));
    }

    Ok(next.run(request).await)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
