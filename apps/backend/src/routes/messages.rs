//! Message catalog endpoints

use axum::{
    extract::{Path, Query},
    Json,
};
use daily_core::catalog;

use crate::error::{ApiError, Result};
use crate::models::{Category, ListMessagesQuery, MessageId, MessageRecord};

/// GET /api/messages
/// Optional filters: `category` and `upToDay` (sequence day, inclusive)
pub async fn list(Query(query): Query<ListMessagesQuery>) -> Result<Json<Vec<&'static MessageRecord>>> {
    let category = match query.category.as_deref() {
        Some(name) => Some(
            Category::from_str(name)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown category: {}", name)))?,
        ),
        None => None,
    };

    let messages = catalog::up_to_day(query.up_to_day.unwrap_or(u32::MAX))
        .filter(|m| category.map_or(true, |c| m.category == c))
        .collect();

    Ok(Json(messages))
}

/// GET /api/messages/rewards
pub async fn rewards() -> Json<Vec<&'static MessageRecord>> {
    Json(catalog::rewards().collect())
}

/// GET /api/messages/:id
pub async fn get_one(Path(id): Path<MessageId>) -> Result<Json<&'static MessageRecord>> {
    catalog::lookup(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Message {}", id)))
}
