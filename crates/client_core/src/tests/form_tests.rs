use super::{FormError, PreferenceForm};
use shared::domain::{PreferenceField, Preferences};

#[test]
fn new_form_starts_with_defaults_and_empty_keys() {
    let form = PreferenceForm::new();
    assert_eq!(form.field(PreferenceField::Topic), "generative AI");
    assert_eq!(form.field(PreferenceField::Domain), "finance");
    assert_eq!(
        form.missing_fields(),
        vec![PreferenceField::GoogleApiKey, PreferenceField::TavilyApiKey]
    );
}

#[test]
fn submit_packages_current_values() {
    let mut form = PreferenceForm::new();
    form.set_field(PreferenceField::Topic, "quantum computing");
    form.set_field(PreferenceField::GoogleApiKey, "g-key");
    form.field_mut(PreferenceField::TavilyApiKey).push_str("t-key");

    let prefs = form.submit().expect("complete form");
    assert_eq!(
        prefs,
        Preferences {
            topic: "quantum computing".to_string(),
            google_api_key: "g-key".to_string(),
            tavily_api_key: "t-key".to_string(),
            ..Preferences::default()
        }
    );
}

#[test]
fn whitespace_only_fields_are_missing_in_form_order() {
    let mut form = PreferenceForm::new();
    form.set_field(PreferenceField::Hobbies, "   ");
    form.set_field(PreferenceField::LearningStyle, "");

    let err = form.submit().expect_err("incomplete form");
    assert_eq!(
        err,
        FormError::MissingFields(vec![
            PreferenceField::LearningStyle,
            PreferenceField::Hobbies,
            PreferenceField::GoogleApiKey,
            PreferenceField::TavilyApiKey,
        ])
    );
    assert!(err.to_string().contains("Hobbies"));
}

#[test]
fn values_are_sent_as_typed() {
    let mut form = PreferenceForm::from_preferences(Preferences {
        google_api_key: "g".into(),
        tavily_api_key: "t".into(),
        ..Preferences::default()
    });
    form.set_field(PreferenceField::Topic, "  Rust  ");
    assert_eq!(form.submit().expect("complete").topic, "  Rust  ");
}
