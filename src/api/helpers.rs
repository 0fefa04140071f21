//! Response builders for API Gateway proxy responses.

use serde_json::{Value, json};

use crate::core::models::SummaryResult;

fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response carrying the summary.
#[must_use]
pub fn ok_summary(result: &SummaryResult) -> Value {
    json_response(200, &json!({ "summary": result.summary }))
}

/// Returns a 200 OK health response.
#[must_use]
pub fn ok_health() -> Value {
    json_response(200, &json!({ "ok": true }))
}

/// Returns a 204 response to a CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 204,
        "headers": {
            "Allow": "POST, OPTIONS",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type"
        },
        "body": ""
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}
