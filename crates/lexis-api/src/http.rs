//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (non-success → [`ApiError::Status`] with the
//! server's own message when it sends one) and JSON decoding, so the endpoint
//! modules stay focused on paths and bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Keys checked, in order, for a human-readable error in a JSON error body.
const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body, reason),
    })
}

/// Read the body and decode it as `T`.
///
/// # Errors
///
/// Returns [`ApiError::Http`] if the body cannot be read, and
/// [`ApiError::Decode`] if it is not valid JSON for `T`.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pick the most useful message out of an error body.
///
/// JSON objects yield their `detail`, `message` or `error` field. Anything
/// else yields the trimmed body, and an empty body yields `reason`.
pub fn error_message(body: &str, reason: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reason.to_string();
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in MESSAGE_KEYS {
            match map.get(key) {
                Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
                Some(Value::Array(items)) if !items.is_empty() => return join_details(items),
                _ => {}
            }
        }
    }
    trimmed.to_string()
}

/// Validation-style detail lists: `[{"msg": "..."}, ...]` or plain strings.
fn join_details(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj
                .get("msg")
                .and_then(Value::as_str)
                .map_or_else(|| item.to_string(), str::to_string),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
