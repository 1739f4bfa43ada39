//! Pathway → presentational view model.
//!
//! [`render`] is pure: the same pathway always yields the same view. Front
//! ends only lay the view out; they never look at the raw DTO.

use shared::{
    domain::StepKind,
    protocol::{LearningPathway, NextStepItem, PathwayStep},
};

use crate::markdown::{self, Block};

pub const EXPLANATION_HEADING: &str = "Explanation and Kickstart Examples";
pub const MILESTONES_HEADING: &str = "History and Milestones";
pub const LINKS_HEADING: &str = "Relevant Links";
pub const TRY_AGAIN_LABEL: &str = "Create Another Pathway";
pub const APP_NAME: &str = "Adaptive Learning Agent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayView {
    pub title: String,
    pub introduction: String,
    pub phases: Vec<PhaseCard>,
    pub explanations: Vec<ExplanationCard>,
    pub milestones: Vec<MilestoneEntry>,
    pub next_steps: NextStepsCard,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseCard {
    pub title: String,
    pub description: String,
    pub steps: Vec<StepCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCard {
    pub title: String,
    pub kind: StepKind,
    pub content: Vec<Block>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Benefit,
    Action,
}

impl AnnotationKind {
    pub fn label(self) -> &'static str {
        match self {
            AnnotationKind::Benefit => "Benefit:",
            AnnotationKind::Action => "Action:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationCard {
    pub title: String,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneEntry {
    pub year: i32,
    pub description: String,
}

impl MilestoneEntry {
    pub fn line(&self) -> String {
        format!("{}: {}", self.year, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStepsCard {
    pub title: String,
    pub items: Vec<NextStepItem>,
}

pub fn render(pathway: &LearningPathway) -> PathwayView {
    PathwayView {
        title: pathway.title.clone(),
        introduction: pathway.introduction.clone(),
        phases: pathway
            .phases
            .iter()
            .map(|phase| PhaseCard {
                title: phase.title.clone(),
                description: phase.description.clone(),
                steps: phase.steps.iter().map(render_step).collect(),
            })
            .collect(),
        explanations: pathway
            .explanation_and_kickstart_examples
            .iter()
            .map(|section| ExplanationCard {
                title: section.title.clone(),
                content: markdown::parse(&section.content),
            })
            .collect(),
        milestones: pathway
            .history_and_milestones
            .iter()
            .map(|milestone| MilestoneEntry {
                year: milestone.year,
                description: milestone.description.clone(),
            })
            .collect(),
        next_steps: NextStepsCard {
            title: pathway.next_steps.title.clone(),
            items: pathway.next_steps.steps.clone(),
        },
        links: pathway.relevant_links.clone(),
    }
}

fn render_step(step: &PathwayStep) -> StepCard {
    let annotations = [
        (AnnotationKind::Benefit, step.benefit.as_deref()),
        (AnnotationKind::Action, step.practical_focus.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, text)| {
        let text = text?.trim();
        (!text.is_empty()).then(|| Annotation {
            kind,
            text: text.to_string(),
        })
    })
    .collect();

    StepCard {
        title: step.title.clone(),
        kind: step.kind,
        content: markdown::parse(&step.content),
        annotations,
    }
}

pub fn footer_line(year: i32) -> String {
    format!("© {year} {APP_NAME}. All rights reserved.")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
