/// Smart Notes - the summarization backend of a note-taking application.
///
/// The crate serves a single `POST /summarize` endpoint as an AWS Lambda behind
/// API Gateway. Note text is summarized by an OpenRouter chat-completion model;
/// when no API key is configured, or the provider fails or times out, a local
/// extractive summarizer produces the summary instead.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) for serverless execution
/// - reqwest for the OpenRouter chat-completion call
/// - openai-api-rs message types for prompt construction
/// - Tokio for the async runtime and the provider deadline
///
/// # Example
///
/// ```no_run
/// use smart_notes::core::config::AppConfig;
/// use smart_notes::features::SummarizationService;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     smart_notes::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let service = SummarizationService::from_config(&config.provider)?;
///
///     let result = service
///         .summarize(Some("Rust ownership rules prevent data races. They are checked at compile time."))
///         .await?;
///     println!("Summary: {}", result.summary);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// smart_notes::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
