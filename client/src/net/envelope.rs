//! Unwrapping of the optional `{success, data}` response envelope.
//!
//! Some services wrap every payload as `{"success": true, "data": ...}` and
//! report failures as `{"success": false, "message": "..."}`; others return the
//! payload directly. Callers always receive the bare payload.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde_json::Value;

use super::error::ApiError;

/// Strip the envelope from a decoded body.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the envelope reports `success: false`.
pub fn unwrap(body: Value) -> Result<Value, ApiError> {
    let Value::Object(mut map) = body else {
        return Ok(body);
    };
    let Some(success) = map.get("success").and_then(Value::as_bool) else {
        return Ok(Value::Object(map));
    };
    if !success {
        let message = error_message(&Value::Object(map.clone()))
            .unwrap_or("request rejected")
            .to_owned();
        return Err(ApiError::Rejected(message));
    }
    Ok(map.remove("data").unwrap_or(Value::Null))
}

/// Pick a human-readable error from a failure body.
pub fn error_message(body: &Value) -> Option<&str> {
    ["message", "error", "detail", "msg"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
}

/// Unwrap and decode into `T`.
///
/// # Errors
///
/// Returns the envelope rejection or a decode failure.
pub fn decode<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let data = unwrap(body)?;
    serde_json::from_value(data).map_err(ApiError::from)
}

/// Some list endpoints answer `{"items": [...]}` (optionally with paging);
/// accept both that and a bare array.
pub fn list_items(data: Value) -> Value {
    match data {
        Value::Object(mut map) => {
            for key in ["items", "list", "records", "results"] {
                if let Some(items @ Value::Array(_)) = map.remove(key) {
                    return items;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}
