//! Review and study-session handlers
//!
//! The review endpoint is the only way an item's box and schedule
//! change. "Today's session" is a point-in-time query: it is computed
//! fresh against current data at each request.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::items::{Item, ReviewStats};

use super::device::device_id;
use super::error::ApiResult;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub correct: bool,
}

/// Apply a review outcome and return the rescheduled item
pub async fn review_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<Item>> {
    let device = device_id(&headers)?;
    let item = state
        .items
        .lock()
        .unwrap()
        .review_item(id, &device, request.correct, Utc::now())?;
    Ok(Json(item))
}

/// Items due for review right now, earliest due first
pub async fn today_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Item>>> {
    let device = device_id(&headers)?;
    let items = state.items.lock().unwrap().due_items(&device, Utc::now())?;
    Ok(Json(items))
}

/// Per-box and due counts for the caller's device
pub async fn session_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<ReviewStats>> {
    let device = device_id(&headers)?;
    let stats = state
        .items
        .lock()
        .unwrap()
        .review_stats(&device, Utc::now())?;
    Ok(Json(stats))
}
