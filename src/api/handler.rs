//! API Lambda handler - thin router in front of the summarization service.
//!
//! This module handles:
//! - Method and path routing for API Gateway proxy events
//! - Request body decoding and validation
//! - Mapping service results onto HTTP responses

use super::{helpers, parsing};
use crate::core::models::SummaryRequest;
use crate::errors::SummarizeError;
use crate::features::SummarizationService;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

pub use self::function_handler as handler;

/// Message returned for any failure other than invalid input.
pub const SUMMARIZE_FAILURE_MESSAGE: &str = "Failed to summarize text";

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error itself; failures are encoded in the response
/// payload's `statusCode`.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    service: &SummarizationService,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route_request(service, &event.payload).await)
}

/// Routes one API Gateway proxy event and builds its response.
pub async fn route_request(service: &SummarizationService, payload: &Value) -> Value {
    let method = parsing::request_method(payload).unwrap_or_default();
    let Some(path) = parsing::request_path(payload) else {
        warn!("Request missing path");
        return helpers::err_response(404, "Not found");
    };

    info!(method = %method, path = %path, "API request");

    if path.ends_with("/health") {
        if method.eq_ignore_ascii_case("GET") {
            return helpers::ok_health();
        }
        return helpers::err_response(405, "Method not allowed");
    }

    if !path.ends_with("/summarize") {
        return helpers::err_response(404, "Not found");
    }

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::preflight();
    }

    if !method.eq_ignore_ascii_case("POST") {
        return helpers::err_response(405, "Method not allowed");
    }

    handle_summarize(service, payload).await
}

async fn handle_summarize(service: &SummarizationService, payload: &Value) -> Value {
    let request = match parse_summary_request(payload) {
        Ok(r) => r,
        Err(e) => {
            error!("Error in summarize API: {}", e);
            return helpers::err_response(500, SUMMARIZE_FAILURE_MESSAGE);
        }
    };

    match service.summarize(request.text().as_deref()).await {
        Ok(result) => helpers::ok_summary(&result),
        Err(SummarizeError::InvalidInput) => {
            helpers::err_response(400, &SummarizeError::InvalidInput.to_string())
        }
        Err(e) => {
            error!("Error in summarize API: {}", e);
            helpers::err_response(e.status_code(), SUMMARIZE_FAILURE_MESSAGE)
        }
    }
}

/// A request without a body is treated as `{}` so that it fails validation
/// rather than parsing.
fn parse_summary_request(payload: &Value) -> Result<SummaryRequest, SummarizeError> {
    match parsing::extract_body(payload)? {
        Some(body) if !body.trim().is_empty() => serde_json::from_str(&body)
            .map_err(|e| SummarizeError::ParseError(format!("Invalid JSON body: {e}"))),
        _ => Ok(SummaryRequest::default()),
    }
}
