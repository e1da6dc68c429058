//! Item CRUD handlers
//!
//! Plain updates only touch the question and answer; the Leitner box
//! and schedule change exclusively through the review endpoint.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::items::Item;

use super::device::device_id;
use super::error::{ApiError, ApiResult};
use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub goal_id: Uuid,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    #[serde(default)]
    pub goal_id: Option<Uuid>,
}

fn validate_texts(question: &str, answer: &str) -> Result<(), ApiError> {
    if question.trim().is_empty() {
        return Err(ApiError::validation("Question is required"));
    }
    if answer.trim().is_empty() {
        return Err(ApiError::validation("Answer is required"));
    }
    Ok(())
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Item>>> {
    let device = device_id(&headers)?;
    let items = state
        .items
        .lock()
        .unwrap()
        .list_items(&device, query.goal_id)?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let device = device_id(&headers)?;
    validate_texts(&request.question, &request.answer)?;

    let item = state.items.lock().unwrap().create_item(
        &device,
        request.goal_id,
        request.question,
        request.answer,
        Utc::now(),
    )?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<Json<Item>> {
    let device = device_id(&headers)?;
    let item = state.items.lock().unwrap().get_item(id, &device)?;
    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateItemRequest>,
) -> ApiResult<Json<Item>> {
    let device = device_id(&headers)?;
    validate_texts(&request.question, &request.answer)?;

    let item = state.items.lock().unwrap().update_item(
        id,
        &device,
        request.question,
        request.answer,
        Utc::now(),
    )?;
    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let device = device_id(&headers)?;
    state.items.lock().unwrap().delete_item(id, &device)?;
    Ok(StatusCode::NO_CONTENT)
}
