use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::SummarizeError;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_APP_TITLE: &str = "Smart Notes App";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Marker used by unfilled `.env` templates (`your-api-key-here`).
const PLACEHOLDER_MARKER: &str = "your-";

/// Remote summarization provider settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub app_url: String,
    pub app_title: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// The API key, unless it is missing, blank or still a template placeholder.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !is_placeholder_credential(key))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[must_use]
pub fn is_placeholder_credential(key: &str) -> bool {
    key.trim().is_empty() || key.contains(PLACEHOLDER_MARKER)
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("SUMMARY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_url("SUMMARY_API_URL", &api_url)?;

        let app_url = var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        validate_url("APP_URL", &app_url)?;

        let timeout = match var("SUMMARY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    SummarizeError::ConfigError(format!("SUMMARY_TIMEOUT_SECS: {e}"))
                })?;
                if secs == 0 {
                    return Err(SummarizeError::ConfigError(
                        "SUMMARY_TIMEOUT_SECS: must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            provider: ProviderConfig {
                api_key: lookup("OPENROUTER_API_KEY"),
                api_url,
                model: var("SUMMARY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                app_url,
                app_title: var("APP_TITLE").unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
                timeout,
            },
        })
    }
}

fn validate_url(name: &str, value: &str) -> Result<(), SummarizeError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| SummarizeError::ConfigError(format!("{name}: {e}")))
}
