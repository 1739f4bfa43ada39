use serde::{Deserialize, Serialize};

use crate::domain::StepKind;

pub const GENERATE_PATHWAY_PATH: &str = "/api/generate-pathway";
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathway {
    pub title: String,
    pub introduction: String,
    #[serde(default)]
    pub phases: Vec<PathwayPhase>,
    #[serde(default)]
    pub explanation_and_kickstart_examples: Vec<ExplanationSection>,
    #[serde(default)]
    pub history_and_milestones: Vec<Milestone>,
    #[serde(default)]
    pub next_steps: NextStepsSection,
    #[serde(default)]
    pub relevant_links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayPhase {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<PathwayStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayStep {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Markdown.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practical_focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationSection {
    pub title: String,
    /// Markdown.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStepsSection {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<NextStepItem>,
}

impl Default for NextStepsSection {
    fn default() -> Self {
        Self {
            title: "Next Steps".to_string(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStepItem {
    pub title: String,
    pub description: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
