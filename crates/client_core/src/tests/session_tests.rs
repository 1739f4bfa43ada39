use super::{dispatch, PathwaySession};
use crate::{
    dispatcher::PathwayGenerator,
    error::DispatchError,
    state::{AppEvent, AppPhase, AppState},
};
use async_trait::async_trait;
use shared::{
    domain::Preferences,
    error::ApiException,
    protocol::{LearningPathway, NextStepsSection},
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn pathway() -> LearningPathway {
    LearningPathway {
        title: "Stub".to_string(),
        introduction: String::new(),
        phases: Vec::new(),
        explanation_and_kickstart_examples: Vec::new(),
        history_and_milestones: Vec::new(),
        next_steps: NextStepsSection::default(),
        relevant_links: vec!["https://example.com".to_string()],
    }
}

struct StubGenerator {
    fail_with: Option<(u16, &'static str)>,
    calls: AtomicUsize,
}

impl StubGenerator {
    fn ok() -> Self {
        Self {
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(status: u16, message: &'static str) -> Self {
        Self {
            fail_with: Some((status, message)),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PathwayGenerator for StubGenerator {
    async fn generate(&self, _preferences: &Preferences) -> Result<LearningPathway, DispatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some((status, message)) => Err(ApiException::new(status, message).into()),
            None => Ok(pathway()),
        }
    }
}

#[test]
fn begin_enters_loading_before_any_request_is_made() {
    let generator = Arc::new(StubGenerator::ok());
    let mut session = PathwaySession::new(Arc::clone(&generator));

    let prefs = session.begin(Preferences::default()).expect("accepted");
    assert_eq!(prefs, Preferences::default());
    assert_eq!(session.state(), &AppState::Loading);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);

    assert!(session.begin(Preferences::default()).is_none());
}

#[tokio::test]
async fn submit_runs_one_request_and_stores_pathway() {
    let generator = Arc::new(StubGenerator::ok());
    let mut session = PathwaySession::new(Arc::clone(&generator));

    let state = session.submit(Preferences::default()).await;
    assert_eq!(state, &AppState::Results { pathway: pathway() });
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn submit_from_results_does_not_dispatch_again() {
    let generator = Arc::new(StubGenerator::ok());
    let mut session = PathwaySession::new(Arc::clone(&generator));

    session.submit(Preferences::default()).await;
    session.submit(Preferences::default()).await;
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.machine().phase(), AppPhase::Results);
}

#[tokio::test]
async fn failed_generation_maps_to_failed_event() {
    let generator = StubGenerator::failing(500, "rate limited");
    let event = dispatch(&generator, &Preferences::default()).await;
    assert_eq!(event, AppEvent::Failed("rate limited".to_string()));
}

#[tokio::test]
async fn try_again_only_applies_from_results() {
    let mut session = PathwaySession::new(StubGenerator::failing(503, "busy"));
    assert!(!session.try_again());

    session.submit(Preferences::default()).await;
    assert_eq!(session.machine().error(), Some("busy"));
    assert!(!session.try_again());

    let mut session = PathwaySession::new(StubGenerator::ok());
    session.submit(Preferences::default()).await;
    assert!(session.try_again());
    assert_eq!(session.state(), &AppState::Form { error: None });
}
