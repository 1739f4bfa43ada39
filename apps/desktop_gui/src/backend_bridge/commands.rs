//! Backend commands queued from UI to backend worker.

use shared::domain::Preferences;

pub enum BackendCommand {
    Generate { preferences: Preferences },
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Generate { .. } => "generate",
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
