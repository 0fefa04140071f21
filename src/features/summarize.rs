use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::fallback::fallback_summary;
use crate::ai::{LlmClient, SummaryProvider};
use crate::core::config::ProviderConfig;
use crate::core::models::SummaryResult;
use crate::errors::SummarizeError;

/// Returned when the provider answers but its payload has no generated text.
pub const NO_SUMMARY_PLACEHOLDER: &str = "Unable to generate summary";

/// Summarizes note text through the configured provider, degrading to the
/// local fallback on any provider failure.
pub struct SummarizationService {
    provider: Option<Arc<dyn SummaryProvider>>,
    timeout: Duration,
}

impl SummarizationService {
    #[must_use]
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Builds the service from startup configuration. A missing or placeholder
    /// credential leaves the service in fallback-only mode.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be constructed.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, SummarizeError> {
        let provider = match LlmClient::new(config) {
            Ok(client) => {
                info!(model = %client.model_name(), "Summarization provider configured");
                Some(Arc::new(client) as Arc<dyn SummaryProvider>)
            }
            Err(SummarizeError::ProviderUnavailable) => {
                info!("No valid OpenRouter API key found, summaries will use the fallback");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(provider, config.timeout))
    }

    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` when `text` is missing or empty. Every other
    /// failure is absorbed into a fallback summary.
    pub async fn summarize(&self, text: Option<&str>) -> Result<SummaryResult, SummarizeError> {
        let text = validate_text(text)?;

        let Some(provider) = &self.provider else {
            info!(
                reason = %SummarizeError::ProviderUnavailable,
                "Using fallback summarization"
            );
            return Ok(fallback_summary(text));
        };

        match self.summarize_remote(provider.as_ref(), text).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(error = %e, "Provider summarization failed, using fallback");
                Ok(fallback_summary(text))
            }
        }
    }

    async fn summarize_remote(
        &self,
        provider: &dyn SummaryProvider,
        text: &str,
    ) -> Result<SummaryResult, SummarizeError> {
        let generated = tokio::time::timeout(self.timeout, provider.summarize(text))
            .await
            .map_err(|_| {
                SummarizeError::ProviderRequestFailed(format!(
                    "request timed out after {}s",
                    self.timeout.as_secs_f64()
                ))
            })??;

        if generated.is_none() {
            warn!("Provider response contained no summary content");
        }

        Ok(SummaryResult::new(
            generated.unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string()),
        ))
    }
}

/// Rejects missing or empty text. Whitespace-only text is accepted.
///
/// # Errors
///
/// Returns `InvalidInput` for `None` or `""`.
pub fn validate_text(text: Option<&str>) -> Result<&str, SummarizeError> {
    match text {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(SummarizeError::InvalidInput),
    }
}
