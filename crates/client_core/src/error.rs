use shared::error::ApiException;
use thiserror::Error;

/// Shown when the backend could not be reached at all.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate learning pathway. Please check your connection and try again.";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("backend unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error(transparent)]
    Http(#[from] ApiException),
    #[error("invalid pathway response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),
}

impl DispatchError {
    /// Single human-readable message for the form's error slot. Callers do not
    /// learn which failure class occurred from it.
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Network(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            DispatchError::Http(exc) => exc.message.clone(),
            DispatchError::Decode(_) => {
                "Failed to generate learning pathway: the backend returned an unexpected response."
                    .to_string()
            }
            DispatchError::InvalidBaseUrl { .. } | DispatchError::ClientSetup(_) => {
                self.to_string()
            }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            DispatchError::Http(exc) => Some(exc.status),
            _ => None,
        }
    }
}
