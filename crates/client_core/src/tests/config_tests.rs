use super::{load_settings_with, normalize_base_url, ClientSettings, DEFAULT_API_BASE_URL};

use std::{collections::HashMap, fs, path::Path, time::Duration};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_to_local_backend_when_nothing_is_configured() {
    let settings = load_settings_with(Path::new("does-not-exist.toml"), env_from(&[]));
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.api_base_url, "http://localhost:5000");
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn environment_overrides_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pathway.toml");
    fs::write(
        &path,
        "api_base_url = \"https://file.example\"\nrequest_timeout_secs = 30\n",
    )
    .expect("write settings");

    let from_file = load_settings_with(&path, env_from(&[]));
    assert_eq!(from_file.api_base_url, "https://file.example");
    assert_eq!(from_file.request_timeout(), Some(Duration::from_secs(30)));

    let from_env = load_settings_with(
        &path,
        env_from(&[
            ("API_BASE_URL", "https://env.example"),
            ("APP__REQUEST_TIMEOUT_SECS", "5"),
        ]),
    );
    assert_eq!(from_env.api_base_url, "https://env.example");
    assert_eq!(from_env.request_timeout_secs, Some(5));
}

#[test]
fn prefixed_variable_wins_over_plain_variable() {
    let settings = load_settings_with(
        Path::new("does-not-exist.toml"),
        env_from(&[
            ("API_BASE_URL", "https://plain.example"),
            ("APP__API_BASE_URL", "https://prefixed.example"),
        ]),
    );
    assert_eq!(settings.api_base_url, "https://prefixed.example");
}

#[test]
fn blank_environment_values_are_treated_as_unset() {
    let settings = load_settings_with(
        Path::new("does-not-exist.toml"),
        env_from(&[("API_BASE_URL", "  "), ("APP__REQUEST_TIMEOUT_SECS", "soon")]),
    );
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn malformed_settings_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pathway.toml");
    fs::write(&path, "api_base_url = [not toml").expect("write settings");

    let settings = load_settings_with(&path, env_from(&[]));
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn zero_timeout_means_no_timeout() {
    let settings = ClientSettings {
        request_timeout_secs: Some(0),
        ..ClientSettings::default()
    };
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn override_replaces_base_url_only_when_present() {
    let settings = ClientSettings::default().with_base_url_override(None);
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    let settings =
        ClientSettings::default().with_base_url_override(Some("https://cli.example".into()));
    assert_eq!(settings.api_base_url, "https://cli.example");
}

#[test]
fn normalizes_base_urls() {
    assert_eq!(
        normalize_base_url(" https://api.example.com/// ").expect("valid"),
        "https://api.example.com"
    );
    assert_eq!(normalize_base_url("").expect("valid"), DEFAULT_API_BASE_URL);
    assert!(normalize_base_url("localhost:5000").is_err());
    assert!(normalize_base_url("not a url").is_err());
}
