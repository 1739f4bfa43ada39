use shared::domain::Preferences;
use tracing::warn;

use crate::{
    dispatcher::PathwayGenerator,
    state::{AppEvent, AppState, AppStateMachine, Effect, Transition},
};

/// Runs one generate request and folds the outcome into a state-machine event.
pub async fn dispatch<G: PathwayGenerator + ?Sized>(
    generator: &G,
    preferences: &Preferences,
) -> AppEvent {
    match generator.generate(preferences).await {
        Ok(pathway) => AppEvent::Succeeded(pathway),
        Err(err) => {
            warn!("pathway generation failed: {err}");
            AppEvent::Failed(err.user_message())
        }
    }
}

/// Drives the state machine against a generator for front ends that can await
/// the request inline.
pub struct PathwaySession<G> {
    machine: AppStateMachine,
    generator: G,
}

impl<G: PathwayGenerator> PathwaySession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            machine: AppStateMachine::new(),
            generator,
        }
    }

    pub fn state(&self) -> &AppState {
        self.machine.state()
    }

    pub fn machine(&self) -> &AppStateMachine {
        &self.machine
    }

    /// Moves to `loading` and hands back the preferences to dispatch, or `None`
    /// when a submit is not accepted in the current state.
    pub fn begin(&mut self, preferences: Preferences) -> Option<Preferences> {
        match self.machine.apply(AppEvent::Submit(preferences)) {
            Transition::Applied(Some(Effect::Dispatch(preferences))) => Some(preferences),
            _ => None,
        }
    }

    pub async fn submit(&mut self, preferences: Preferences) -> &AppState {
        if let Some(preferences) = self.begin(preferences) {
            let event = dispatch(&self.generator, &preferences).await;
            self.machine.apply(event);
        }
        self.machine.state()
    }

    /// "Try again": only honored from `results`.
    pub fn try_again(&mut self) -> bool {
        matches!(self.machine.apply(AppEvent::Reset), Transition::Applied(_))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
