//! UI/backend events and error modeling for the desktop GUI controller.

use shared::protocol::{HealthStatus, LearningPathway};

pub enum UiEvent {
    Info(String),
    PathwayReady(LearningPathway),
    GenerationFailed(String),
    BackendHealth(HealthStatus),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    HealthCheck,
}

#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Startup failures leave no backend to talk to; the form stays usable but
    /// submits cannot be served.
    pub fn is_fatal_for_backend(&self) -> bool {
        self.context == UiErrorContext::BackendStartup
    }

    pub fn status_line(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => {
                format!("Backend worker startup failure: {}", self.message)
            }
            UiErrorContext::HealthCheck => format!("Backend unreachable: {}", self.message),
        }
    }
}
