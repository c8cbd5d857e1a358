//! Error type shared by every backend call.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is `Clone` because one in-flight request can be awaited by many
//! query observers; each of them receives the same failure.

use thiserror::Error;

/// Failure of a request against one of the backend services.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The service answered 2xx but its envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The call is not possible in this environment (e.g. during SSR).
    #[error("not available: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Build a status error, preferring a message extracted from the body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| crate::net::envelope::error_message(&v).map(str::to_owned))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status_text(status).to_owned()
                } else {
                    trimmed.chars().take(200).collect()
                }
            });
        Self::Status { status, message }
    }

    /// Whether the error is a 404 from the service.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        409 => "conflict",
        422 => "validation failed",
        500 => "internal server error",
        502 => "bad gateway",
        503 => "service unavailable",
        504 => "gateway timeout",
        _ => "unexpected status",
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
