//! GUI model and the reducer that folds backend events into it.
//!
//! Kept free of egui so the screen flow can be exercised without a window.

use std::time::Instant;

use client_core::{
    AppEvent, AppPhase, AppStateMachine, Effect, LoadingProgress, PreferenceForm, Transition,
};
use shared::protocol::HealthStatus;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

#[derive(Debug, Default)]
pub struct GuiModel {
    pub machine: AppStateMachine,
    pub form: PreferenceForm,
    /// Client-side validation message; distinct from the request error held by
    /// the state machine.
    pub validation: Option<String>,
    pub status: String,
    pub health: Option<HealthStatus>,
    pub banner: Option<UiError>,
    loading_started: Option<Instant>,
}

impl GuiModel {
    pub fn new(form: PreferenceForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Validates the form and moves to `loading`. Returns the command to queue,
    /// or `None` when nothing should be sent.
    pub fn submit(&mut self, now: Instant) -> Option<BackendCommand> {
        let preferences = match self.form.submit() {
            Ok(preferences) => preferences,
            Err(err) => {
                self.validation = Some(err.to_string());
                return None;
            }
        };
        self.validation = None;

        match self.machine.apply(AppEvent::Submit(preferences)) {
            Transition::Applied(Some(Effect::Dispatch(preferences))) => {
                self.loading_started = Some(now);
                Some(BackendCommand::Generate { preferences })
            }
            _ => None,
        }
    }

    /// The generate command never reached the worker; fall back to the form.
    pub fn dispatch_failed(&mut self) {
        let reason = self.status.clone();
        self.finish_loading(AppEvent::Failed(reason));
    }

    pub fn try_again(&mut self) -> bool {
        matches!(self.machine.apply(AppEvent::Reset), Transition::Applied(_))
    }

    pub fn loading_progress(&self, now: Instant) -> Option<LoadingProgress> {
        let started = self.loading_started?;
        (self.machine.phase() == AppPhase::Loading)
            .then(|| LoadingProgress::at(now.saturating_duration_since(started)))
    }

    pub fn reduce(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::PathwayReady(pathway) => self.finish_loading(AppEvent::Succeeded(pathway)),
            UiEvent::GenerationFailed(message) => self.finish_loading(AppEvent::Failed(message)),
            UiEvent::BackendHealth(health) => {
                self.status = format!("Backend status: {}", health.status);
                self.health = Some(health);
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), "{}", err.message());
                self.status = err.status_line();
                if err.is_fatal_for_backend() && self.machine.phase() == AppPhase::Loading {
                    self.finish_loading(AppEvent::Failed(err.message().to_string()));
                }
                self.banner = Some(err);
            }
        }
    }

    fn finish_loading(&mut self, event: AppEvent) {
        if let Transition::Applied(_) = self.machine.apply(event) {
            self.loading_started = None;
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
