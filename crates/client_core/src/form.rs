//! Preference form model shared by the CLI and the desktop GUI.

use shared::domain::{PreferenceField, Preferences};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<PreferenceField>),
}

fn join_fields(fields: &[PreferenceField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Default)]
pub struct PreferenceForm {
    values: Preferences,
}

impl PreferenceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preferences(values: Preferences) -> Self {
        Self { values }
    }

    pub fn field(&self, field: PreferenceField) -> &str {
        self.values.get(field)
    }

    pub fn field_mut(&mut self, field: PreferenceField) -> &mut String {
        self.values.get_mut(field)
    }

    pub fn set_field(&mut self, field: PreferenceField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    /// Fields that are blank after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<PreferenceField> {
        PreferenceField::ALL
            .into_iter()
            .filter(|field| self.values.get(*field).trim().is_empty())
            .collect()
    }

    /// Packages the current values. Values are sent as typed; only presence is
    /// checked.
    pub fn submit(&self) -> Result<Preferences, FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(self.values.clone())
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
