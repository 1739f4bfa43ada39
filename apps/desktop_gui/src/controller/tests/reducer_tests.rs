use std::time::{Duration, Instant};

use client_core::{AppPhase, PreferenceForm, GENERIC_FAILURE_MESSAGE};
use shared::{
    domain::PreferenceField,
    protocol::{HealthStatus, LearningPathway},
};

use super::GuiModel;
use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

fn filled_model() -> GuiModel {
    let mut form = PreferenceForm::new();
    form.set_field(PreferenceField::GoogleApiKey, "google-key");
    form.set_field(PreferenceField::TavilyApiKey, "tavily-key");
    GuiModel::new(form)
}

fn pathway() -> LearningPathway {
    serde_json::from_value(serde_json::json!({
        "title": "Quantum Computing for Finance",
        "introduction": "Start here.",
        "phases": [],
        "explanation_and_kickstart_examples": [],
        "history_and_milestones": [],
        "relevant_links": []
    }))
    .expect("pathway fixture")
}

#[test]
fn incomplete_form_stays_put_with_validation_message() {
    let mut model = GuiModel::new(PreferenceForm::new());
    assert!(model.submit(Instant::now()).is_none());
    assert_eq!(model.machine.phase(), AppPhase::Form);
    let message = model.validation.as_deref().expect("validation message");
    assert!(message.contains("Google API Key"), "{message}");
}

#[test]
fn submit_moves_to_loading_and_queues_generate() {
    let mut model = filled_model();
    let started = Instant::now();
    let cmd = model.submit(started).expect("command");
    let BackendCommand::Generate { preferences } = cmd else {
        panic!("expected generate command");
    };
    assert_eq!(preferences.topic, "generative AI");
    assert_eq!(model.machine.phase(), AppPhase::Loading);

    let progress = model
        .loading_progress(started + Duration::from_millis(2600))
        .expect("loading progress");
    assert_eq!(progress.percent(), 12);
    assert_eq!(progress.message_index(), 1);

    // a second submit while loading sends nothing
    assert!(model.submit(Instant::now()).is_none());
}

#[test]
fn success_shows_results_and_clears_loading() {
    let mut model = filled_model();
    model.submit(Instant::now());
    model.reduce(UiEvent::PathwayReady(pathway()));
    assert_eq!(model.machine.phase(), AppPhase::Results);
    assert!(model.loading_progress(Instant::now()).is_none());

    assert!(model.try_again());
    assert_eq!(model.machine.phase(), AppPhase::Form);
    assert_eq!(model.machine.error(), None);
}

#[test]
fn failure_returns_to_form_with_message() {
    let mut model = filled_model();
    model.submit(Instant::now());
    model.reduce(UiEvent::GenerationFailed("rate limited".to_string()));
    assert_eq!(model.machine.phase(), AppPhase::Form);
    assert_eq!(model.machine.error(), Some("rate limited"));
    // inputs are kept for correction
    assert_eq!(model.form.field(PreferenceField::GoogleApiKey), "google-key");
}

#[test]
fn late_result_after_form_is_ignored() {
    let mut model = filled_model();
    model.reduce(UiEvent::PathwayReady(pathway()));
    assert_eq!(model.machine.phase(), AppPhase::Form);
}

#[test]
fn undeliverable_command_falls_back_to_form() {
    let mut model = filled_model();
    model.submit(Instant::now());
    model.status.clear();
    model.dispatch_failed();
    assert_eq!(model.machine.phase(), AppPhase::Form);
    assert_eq!(model.machine.error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn backend_startup_error_aborts_outstanding_request() {
    let mut model = filled_model();
    model.submit(Instant::now());
    model.reduce(UiEvent::Error(UiError::new(
        UiErrorContext::BackendStartup,
        "failed to build runtime",
    )));
    assert_eq!(model.machine.phase(), AppPhase::Form);
    assert_eq!(model.machine.error(), Some("failed to build runtime"));
    assert!(model.banner.is_some());
}

#[test]
fn health_and_info_update_status() {
    let mut model = GuiModel::default();
    model.reduce(UiEvent::Info("Backend: http://localhost:5000".to_string()));
    assert_eq!(model.status, "Backend: http://localhost:5000");
    model.reduce(UiEvent::BackendHealth(HealthStatus {
        status: "healthy".to_string(),
        backend: None,
        version: None,
    }));
    assert_eq!(model.status, "Backend status: healthy");
    assert!(model.health.as_ref().is_some_and(HealthStatus::is_healthy));
}

#[test]
fn health_check_error_keeps_outstanding_request() {
    let mut model = filled_model();
    model.submit(Instant::now());
    model.reduce(UiEvent::Error(UiError::new(
        UiErrorContext::HealthCheck,
        "connection refused",
    )));
    assert_eq!(model.machine.phase(), AppPhase::Loading);
    assert_eq!(model.status, "Backend unreachable: connection refused");
    assert!(model.banner.is_some());
}
