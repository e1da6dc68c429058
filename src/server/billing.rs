//! Billing stub endpoints
//!
//! No payment provider is wired up: checkout returns a static URL
//! carrying the device id, and the webhook acknowledges every payload
//! without inspecting it.

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use super::device::device_id;
use super::error::ApiResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

pub async fn create_checkout(headers: HeaderMap) -> ApiResult<Json<CheckoutResponse>> {
    let device = device_id(&headers)?;
    Ok(Json(CheckoutResponse {
        checkout_url: format!("https://checkout.example.com/pay?deviceId={}", device),
    }))
}

pub async fn webhook(_payload: Bytes) -> Json<Value> {
    Json(json!({ "status": "received" }))
}
