//! Goal CRUD handlers

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::goals::Goal;

use super::device::device_id;
use super::error::{ApiError, ApiResult};
use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl GoalRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("Title is required"));
        }
        Ok(())
    }
}

pub async fn list_goals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Goal>>> {
    let device = device_id(&headers)?;
    let goals = state.goals.lock().unwrap().list_goals(&device)?;
    Ok(Json(goals))
}

pub async fn create_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GoalRequest>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let device = device_id(&headers)?;
    request.validate()?;

    let goal = state.goals.lock().unwrap().create_goal(
        &device,
        request.title,
        request.description,
        Utc::now(),
    )?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<Json<Goal>> {
    let device = device_id(&headers)?;
    let goal = state.goals.lock().unwrap().get_goal(id, &device)?;
    Ok(Json(goal))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<GoalRequest>,
) -> ApiResult<Json<Goal>> {
    let device = device_id(&headers)?;
    request.validate()?;

    let goal = state.goals.lock().unwrap().update_goal(
        id,
        &device,
        request.title,
        request.description,
        Utc::now(),
    )?;
    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let device = device_id(&headers)?;
    state.goals.lock().unwrap().delete_goal(id, &device)?;
    Ok(StatusCode::NO_CONTENT)
}
