use std::collections::HashMap;
use std::time::Duration;

use smart_notes::core::config::{
    AppConfig, DEFAULT_API_URL, DEFAULT_APP_TITLE, DEFAULT_APP_URL, DEFAULT_MODEL,
    ProviderConfig, is_placeholder_credential,
};
use smart_notes::errors::SummarizeError;

fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, SummarizeError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_without_environment() {
    let config = config_from(&[]).unwrap();
    let provider = &config.provider;

    assert!(provider.api_key.is_none());
    assert!(provider.credential().is_none());
    assert_eq!(provider.api_url, DEFAULT_API_URL);
    assert_eq!(provider.model, DEFAULT_MODEL);
    assert_eq!(provider.app_url, DEFAULT_APP_URL);
    assert_eq!(provider.app_title, DEFAULT_APP_TITLE);
    assert_eq!(provider.timeout, Duration::from_secs(15));
}

#[test]
fn test_overrides_are_read() {
    let config = config_from(&[
        ("OPENROUTER_API_KEY", "sk-or-v1-real"),
        ("APP_URL", "https://notes.example.com"),
        ("APP_TITLE", "Team Notes"),
        ("SUMMARY_MODEL", "openai/gpt-4o-mini"),
        ("SUMMARY_API_URL", "https://llm.internal.example.com/v1/chat/completions"),
        ("SUMMARY_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    let provider = &config.provider;

    assert_eq!(provider.credential(), Some("sk-or-v1-real"));
    assert_eq!(provider.app_url, "https://notes.example.com");
    assert_eq!(provider.app_title, "Team Notes");
    assert_eq!(provider.model, "openai/gpt-4o-mini");
    assert_eq!(
        provider.api_url,
        "https://llm.internal.example.com/v1/chat/completions"
    );
    assert_eq!(provider.timeout, Duration::from_secs(5));
}

#[test]
fn test_blank_optional_values_use_defaults() {
    let config = config_from(&[("APP_URL", "  "), ("SUMMARY_MODEL", "")]).unwrap();

    assert_eq!(config.provider.app_url, DEFAULT_APP_URL);
    assert_eq!(config.provider.model, DEFAULT_MODEL);
}

#[test]
fn test_placeholder_credentials_are_unusable() {
    assert!(is_placeholder_credential(""));
    assert!(is_placeholder_credential("   "));
    assert!(is_placeholder_credential("your-api-key-here"));
    assert!(is_placeholder_credential("sk-or-your-key"));
    assert!(!is_placeholder_credential("sk-or-v1-0123456789"));

    let config = config_from(&[("OPENROUTER_API_KEY", "your-openrouter-api-key")]).unwrap();
    assert!(config.provider.api_key.is_some());
    assert!(config.provider.credential().is_none());
}

#[test]
fn test_invalid_urls_are_rejected() {
    let err = config_from(&[("APP_URL", "not a url")]).unwrap_err();
    assert!(matches!(err, SummarizeError::ConfigError(ref m) if m.starts_with("APP_URL")));

    let err = config_from(&[("SUMMARY_API_URL", "/relative/path")]).unwrap_err();
    assert!(matches!(err, SummarizeError::ConfigError(ref m) if m.starts_with("SUMMARY_API_URL")));
}

#[test]
fn test_invalid_timeouts_are_rejected() {
    for raw in ["0", "-3", "fifteen"] {
        let err = config_from(&[("SUMMARY_TIMEOUT_SECS", raw)]).unwrap_err();
        assert!(matches!(err, SummarizeError::ConfigError(_)), "timeout {raw}");
    }
}

#[test]
fn test_default_provider_config_has_no_credential() {
    assert!(ProviderConfig::default().credential().is_none());
}
