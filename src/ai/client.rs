//! LLM (OpenRouter) API client module
//!
//! Encapsulates the chat-completion call used to summarize note content.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::provider::SummaryProvider;
use crate::core::config::ProviderConfig;
use crate::errors::SummarizeError;
use crate::prompt::{MAX_SUMMARY_TOKENS, SUMMARY_TEMPERATURE, build_prompt};

const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
const X_TITLE: HeaderName = HeaderName::from_static("x-title");

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating note summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    api_url: String,
    model_name: String,
    app_url: String,
    app_title: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` when the configuration carries no usable
    /// credential, or `ConfigError` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, SummarizeError> {
        let api_key = config
            .credential()
            .ok_or(SummarizeError::ProviderUnavailable)?
            .to_string();

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizeError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            api_url: config.api_url.clone(),
            model_name: config.model.clone(),
            app_url: config.app_url.clone(),
            app_title: config.app_title.clone(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        json!({
            "model": self.model_name,
            "messages": build_messages_from_prompt(prompt),
            "max_tokens": MAX_SUMMARY_TOKENS,
            "temperature": SUMMARY_TEMPERATURE,
        })
    }

    fn build_headers(&self) -> Result<HeaderMap, SummarizeError> {
        let mut headers = HeaderMap::new();

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| SummarizeError::ConfigError(format!("Invalid Authorization header: {e}")))?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let referer = HeaderValue::from_str(&self.app_url)
            .map_err(|e| SummarizeError::ConfigError(format!("Invalid HTTP-Referer header: {e}")))?;
        headers.insert(HTTP_REFERER, referer);

        let title = HeaderValue::from_str(&self.app_title)
            .map_err(|e| SummarizeError::ConfigError(format!("Invalid X-Title header: {e}")))?;
        headers.insert(X_TITLE, title);

        Ok(headers)
    }

    /// Sends one chat-completion request and reads the generated text.
    ///
    /// # Errors
    ///
    /// Returns `ProviderRequestFailed` on transport errors, timeouts, non-2xx
    /// statuses and bodies that are not JSON.
    pub async fn generate_summary(&self, text: &str) -> Result<Option<String>, SummarizeError> {
        let prompt = build_prompt(text);

        #[cfg(feature = "debug-logs")]
        info!("Using summarization prompt:\n{:?}", prompt);

        info!(
            model = %self.model_name,
            estimated_input_tokens = estimate_tokens(text),
            "Calling summarization provider"
        );

        let request_body = self.build_request_body(&prompt);

        let response = self
            .http
            .post(&self.api_url)
            .headers(self.build_headers()?)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SummarizeError::ProviderRequestFailed(format!(
                "provider returned status {status}: {body}"
            )));
        }

        let response_json: Value = serde_json::from_str(&body)?;
        let summary = extract_summary(&response_json);
        debug!(has_content = summary.is_some(), "Provider response parsed");

        Ok(summary)
    }
}

#[async_trait]
impl SummaryProvider for LlmClient {
    async fn summarize(&self, text: &str) -> Result<Option<String>, SummarizeError> {
        self.generate_summary(text).await
    }
}

/// Reads `choices[0].message.content` unchanged. Whitespace-only content
/// counts as absent so a successful summary is never blank.
#[must_use]
pub fn extract_summary(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

pub(crate) fn build_messages_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}
