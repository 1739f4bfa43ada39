//! Form → loading → results state machine.
//!
//! Every transition is a total function of the current state and the event.
//! Events that make no sense in the current state are reported as
//! [`Transition::Ignored`] and leave the state untouched; in particular a
//! second submit while a request is outstanding never dispatches.

use std::fmt;

use shared::{domain::Preferences, protocol::LearningPathway};

use crate::error::GENERIC_FAILURE_MESSAGE;

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Form { error: Option<String> },
    Loading,
    Results { pathway: LearningPathway },
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Form { error: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Form,
    Loading,
    Results,
}

impl fmt::Display for AppPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppPhase::Form => "form",
            AppPhase::Loading => "loading",
            AppPhase::Results => "results",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Submit(Preferences),
    Succeeded(LearningPathway),
    Failed(String),
    Reset,
}

/// Work the caller must perform after an applied transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Dispatch(Preferences),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Applied(Option<Effect>),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct AppStateMachine {
    state: AppState,
}

impl AppStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> AppPhase {
        match self.state {
            AppState::Form { .. } => AppPhase::Form,
            AppState::Loading => AppPhase::Loading,
            AppState::Results { .. } => AppPhase::Results,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AppState::Form { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn pathway(&self) -> Option<&LearningPathway> {
        match &self.state {
            AppState::Results { pathway } => Some(pathway),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: AppEvent) -> Transition {
        let from = self.phase();
        let transition = match (from, event) {
            (AppPhase::Form, AppEvent::Submit(preferences)) => {
                self.state = AppState::Loading;
                Transition::Applied(Some(Effect::Dispatch(preferences)))
            }
            (AppPhase::Loading, AppEvent::Succeeded(pathway)) => {
                self.state = AppState::Results { pathway };
                Transition::Applied(None)
            }
            (AppPhase::Loading, AppEvent::Failed(message)) => {
                let message = if message.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                };
                self.state = AppState::Form {
                    error: Some(message),
                };
                Transition::Applied(None)
            }
            (AppPhase::Results, AppEvent::Reset) => {
                self.state = AppState::default();
                Transition::Applied(None)
            }
            _ => Transition::Ignored,
        };

        match &transition {
            Transition::Applied(_) => {
                tracing::debug!(from = %from, to = %self.phase(), "app state transition")
            }
            Transition::Ignored => tracing::debug!(state = %from, "ignored app event"),
        }
        transition
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
