//! Tests for config functionality.

use crate::config::types::{DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_DESCRIPTION_PLACEHOLDER};
use crate::config::{Config, MAX_ENRICHMENT_LIMIT};
use crate::error::ForgeError;
use crate::provider::ProviderKind;
use crate::timeline::{EventFilter, TimeRange};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.enrichment_limit, 10);
    assert_eq!(config.github_api_base, "https://api.github.com");
    assert_eq!(config.gitlab_api_base, "https://gitlab.com/api/v4");
    assert_eq!(config.time_range, TimeRange::Month);
    assert_eq!(config.event_filter, EventFilter::All);
    assert_eq!(config.description_placeholder, DEFAULT_DESCRIPTION_PLACEHOLDER);
    assert_eq!(config.description_max_chars, DEFAULT_DESCRIPTION_MAX_CHARS);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config.enrichment_limit, 10);
    assert_eq!(config.time_range, TimeRange::Month);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
enrichment_limit: 20
time_range: week
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.enrichment_limit, 20);
    assert_eq!(config.time_range, TimeRange::Week);

    // Unspecified values should use defaults
    assert_eq!(config.event_filter, EventFilter::All);
    assert_eq!(config.description_max_chars, 150);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
enrichment_limit: 15
github_api_base: https://github.example.com/api/v3
gitlab_api_base: https://gitlab.example.com/api/v4
time_range: year
event_filter: pull_requests
description_placeholder: "(empty)"
description_max_chars: 80
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.enrichment_limit, 15);
    assert_eq!(config.api_base(ProviderKind::GitHub), "https://github.example.com/api/v3");
    assert_eq!(config.api_base(ProviderKind::GitLab), "https://gitlab.example.com/api/v4");
    assert_eq!(config.time_range, TimeRange::Year);
    assert_eq!(config.event_filter, EventFilter::PullRequests);
    assert_eq!(config.description_placeholder, "(empty)");
    assert_eq!(config.description_max_chars, 80);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
enrichment_limit: 5
some_future_field: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.enrichment_limit, 5);
}

#[test]
fn test_zero_enrichment_limit_is_allowed() {
    let config = Config::from_yaml("enrichment_limit: 0").unwrap();
    assert_eq!(config.enrichment_limit, 0);
}

#[test]
fn test_enrichment_limit_above_max_rejected() {
    let yaml = format!("enrichment_limit: {}", MAX_ENRICHMENT_LIMIT + 1);
    let err = Config::from_yaml(&yaml).unwrap_err();
    assert!(err.to_string().contains("enrichment_limit"));
}

#[test]
fn test_zero_description_max_chars_rejected() {
    let err = Config::from_yaml("description_max_chars: 0").unwrap_err();
    assert!(err.to_string().contains("description_max_chars"));
}

#[test]
fn test_unknown_time_range_rejected() {
    let err = Config::from_yaml("time_range: decade").unwrap_err();
    assert!(matches!(err, ForgeError::FilterValidation(_)));
    assert!(err.to_string().contains("unknown time range 'decade'"));
}

#[test]
fn test_unknown_event_filter_rejected() {
    let err = Config::from_yaml("event_filter: deploys").unwrap_err();
    assert!(matches!(err, ForgeError::FilterValidation(_)));
}

#[test]
fn test_trailing_slash_base_rejected() {
    let err = Config::from_yaml("gitlab_api_base: https://gitlab.com/api/v4/").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("gitlab_api_base"));
    assert!(msg.contains("'https://gitlab.com/api/v4'"));
}

#[test]
fn test_non_http_base_rejected() {
    let err = Config::from_yaml("github_api_base: api.github.com").unwrap_err();
    assert!(err.to_string().contains("github_api_base"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        enrichment_limit: 12,
        event_filter: EventFilter::Merges,
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.enrichment_limit, 12);
    assert_eq!(parsed.event_filter, EventFilter::Merges);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("forgeboard.yaml");
    std::fs::write(&path, "enrichment_limit: 3\nevent_filter: commits\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.enrichment_limit, 3);
    assert_eq!(config.event_filter, EventFilter::Commits);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load(dir.path().join("missing.yaml")).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_description_style_mirrors_config() {
    let config = Config::from_yaml("description_max_chars: 42").unwrap();
    let style = config.description_style();
    assert_eq!(style.max_chars, 42);
    assert_eq!(style.placeholder, DEFAULT_DESCRIPTION_PLACEHOLDER);
}
