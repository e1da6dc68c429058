//! Device identity extraction
//!
//! The `X-Device-Id` header is the sole ownership key for all data.
//! The value is never verified; it partitions data and nothing more.

use axum::http::HeaderMap;

use super::error::ApiError;

pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Read a non-blank device id from the request headers
pub fn header_device_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(DEVICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Extract the device id, rejecting requests that lack one
pub fn device_id(headers: &HeaderMap) -> Result<String, ApiError> {
    header_device_id(headers)
        .ok_or_else(|| ApiError::validation("Device ID is required in X-Device-Id header"))
}
