//! Client core for the learning pathway generator: request dispatch, the
//! form → loading → results state machine, and pathway rendering.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod export;
pub mod form;
pub mod loading;
pub mod markdown;
pub mod render;
pub mod session;
pub mod state;

pub use config::{load_settings, ClientSettings, DEFAULT_API_BASE_URL};
pub use dispatcher::{HttpPathwayClient, PathwayGenerator};
pub use error::{DispatchError, GENERIC_FAILURE_MESSAGE};
pub use form::{FormError, PreferenceForm};
pub use loading::{LoadingProgress, LoadingTicker};
pub use render::{render, PathwayView};
pub use session::{dispatch, PathwaySession};
pub use state::{AppEvent, AppPhase, AppState, AppStateMachine, Effect, Transition};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
