//! Anonymous login stub
//!
//! Echoes the device identifier back as an opaque token. No credential
//! is issued; the device id itself remains the bearer key for every
//! other endpoint.

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::device::header_device_id;
use super::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub device_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// Log in with a device id from the header or, failing that, the body.
/// The header takes precedence when both are present; the body is
/// optional, so it is parsed leniently.
pub async fn login(headers: HeaderMap, body: Bytes) -> ApiResult<Json<LoginResponse>> {
    let body_id = serde_json::from_slice::<LoginRequest>(&body)
        .ok()
        .and_then(|request| request.device_id)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let device = header_device_id(&headers).or(body_id).ok_or_else(|| {
        ApiError::validation("Device ID is required in X-Device-Id header or request body")
    })?;

    Ok(Json(LoginResponse {
        token: device,
        message: "Login successful".to_string(),
    }))
}
