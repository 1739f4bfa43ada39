use std::fmt;

use serde::{Deserialize, Serialize};

/// Learner input sent as the body of a generate request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub learning_style: String,
    pub topic: String,
    pub hobbies: String,
    pub domain: String,
    pub google_api_key: String,
    pub tavily_api_key: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            learning_style: "Intuitive real-world examples".to_string(),
            topic: "generative AI".to_string(),
            hobbies: "watching friends on Netflix".to_string(),
            domain: "finance".to_string(),
            google_api_key: String::new(),
            tavily_api_key: String::new(),
        }
    }
}

impl Preferences {
    pub fn get(&self, field: PreferenceField) -> &str {
        match field {
            PreferenceField::LearningStyle => &self.learning_style,
            PreferenceField::Topic => &self.topic,
            PreferenceField::Hobbies => &self.hobbies,
            PreferenceField::Domain => &self.domain,
            PreferenceField::GoogleApiKey => &self.google_api_key,
            PreferenceField::TavilyApiKey => &self.tavily_api_key,
        }
    }

    pub fn get_mut(&mut self, field: PreferenceField) -> &mut String {
        match field {
            PreferenceField::LearningStyle => &mut self.learning_style,
            PreferenceField::Topic => &mut self.topic,
            PreferenceField::Hobbies => &mut self.hobbies,
            PreferenceField::Domain => &mut self.domain,
            PreferenceField::GoogleApiKey => &mut self.google_api_key,
            PreferenceField::TavilyApiKey => &mut self.tavily_api_key,
        }
    }
}

// Keys must never reach logs.
impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("learning_style", &self.learning_style)
            .field("topic", &self.topic)
            .field("hobbies", &self.hobbies)
            .field("domain", &self.domain)
            .field("google_api_key", &redact(&self.google_api_key))
            .field("tavily_api_key", &redact(&self.tavily_api_key))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    LearningStyle,
    Topic,
    Hobbies,
    Domain,
    GoogleApiKey,
    TavilyApiKey,
}

impl PreferenceField {
    /// Form order.
    pub const ALL: [PreferenceField; 6] = [
        PreferenceField::LearningStyle,
        PreferenceField::Topic,
        PreferenceField::Hobbies,
        PreferenceField::Domain,
        PreferenceField::GoogleApiKey,
        PreferenceField::TavilyApiKey,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            PreferenceField::LearningStyle => "learningStyle",
            PreferenceField::Topic => "topic",
            PreferenceField::Hobbies => "hobbies",
            PreferenceField::Domain => "domain",
            PreferenceField::GoogleApiKey => "googleApiKey",
            PreferenceField::TavilyApiKey => "tavilyApiKey",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PreferenceField::LearningStyle => "Preferred Learning Style",
            PreferenceField::Topic => "Learning Topic / Subject",
            PreferenceField::Hobbies => "Hobbies",
            PreferenceField::Domain => "Domain / Field of Interest",
            PreferenceField::GoogleApiKey => "Google API Key (Gemini)",
            PreferenceField::TavilyApiKey => "Tavily API Key",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PreferenceField::LearningStyle => "e.g., Visual learner, project-based",
            PreferenceField::Topic => "e.g., Quantum Computing, History of Rome",
            PreferenceField::Hobbies => "e.g., Playing guitar, hiking, video games",
            PreferenceField::Domain => "e.g., Healthcare, software development",
            PreferenceField::GoogleApiKey => "Your Google AI Studio API key",
            PreferenceField::TavilyApiKey => "Your Tavily search API key",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(
            self,
            PreferenceField::GoogleApiKey | PreferenceField::TavilyApiKey
        )
    }
}

impl fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Concept,
    Example,
    Project,
    Resource,
    #[serde(other)]
    Other,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Concept => "Concept",
            StepKind::Example => "Example",
            StepKind::Project => "Project",
            StepKind::Resource => "Resource",
            StepKind::Other => "Step",
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
