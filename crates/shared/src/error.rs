use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error body returned by the backend on non-2xx responses.
///
/// The generate endpoint documents an `error` string; FastAPI deployments
/// answer with `detail` instead, either a string or a list of validation
/// entries carrying `msg`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ApiErrorPayload {
    /// First non-blank message carried by the payload.
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().map(str::trim) {
            if !error.is_empty() {
                return Some(error.to_string());
            }
        }
        match self.detail.as_ref()? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail.trim().to_string()),
            Value::Array(entries) => entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .map(str::trim)
                .find(|msg| !msg.is_empty())
                .map(str::to_string),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error("HTTP {status}: {message}")]
pub struct ApiException {
    pub status: u16,
    pub message: String,
}

impl ApiException {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds the exception from a raw error body, tolerating bodies that are
    /// not JSON at all.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ApiErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.message())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        Self::new(status, message)
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
