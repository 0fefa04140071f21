use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Text is required")]
    InvalidInput,

    #[error("No usable summarization provider credential configured")]
    ProviderUnavailable,

    #[error("Summarization provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Fallback summarization failed: {0}")]
    FallbackInternalFault(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Failed to access note storage: {0}")]
    StorageError(String),
}

impl SummarizeError {
    /// HTTP status the error maps to when it reaches the endpoint boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::InvalidInput => 400,
            SummarizeError::NoteNotFound(_) => 404,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummarizeError::ProviderRequestFailed(format!("request timed out: {error}"))
        } else {
            SummarizeError::ProviderRequestFailed(error.to_string())
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::ProviderRequestFailed(format!("malformed response body: {error}"))
    }
}

impl From<anyhow::Error> for SummarizeError {
    fn from(error: anyhow::Error) -> Self {
        SummarizeError::StorageError(error.to_string())
    }
}
