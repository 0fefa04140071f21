use async_trait::async_trait;

use crate::errors::SummarizeError;

/// A remote engine able to summarize text.
///
/// `Ok(None)` means the provider answered successfully but the payload carried
/// no generated text.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Option<String>, SummarizeError>;
}
