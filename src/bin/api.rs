use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use smart_notes::core::config::AppConfig;
use smart_notes::features::SummarizationService;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    smart_notes::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let service = Arc::new(SummarizationService::from_config(&config.provider).map_err(|e| {
        error!("Failed to initialize summarization service: {}", e);
        Error::from(e)
    })?);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let service = Arc::clone(&service);
        async move { smart_notes::api::handler(&service, event).await }
    }))
    .await
}
