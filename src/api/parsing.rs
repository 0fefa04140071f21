//! Helpers for reading API Gateway proxy events.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::SummarizeError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from either an HTTP API (v2) or REST API (v1) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request path without any trailing slash.
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .map(|p| p.trim_end_matches('/'))
}

/// Request body as text, decoding it when the gateway marked it base64.
///
/// # Errors
///
/// Returns `ParseError` if the body is not a string or does not decode to
/// UTF-8.
pub fn extract_body(payload: &Value) -> Result<Option<String>, SummarizeError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(SummarizeError::ParseError(
                "Invalid body format".to_string(),
            ));
        }
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(Some(body.clone()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| SummarizeError::ParseError(format!("Failed to decode body: {e}")))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| SummarizeError::ParseError(format!("Body is not valid UTF-8: {e}")))
}
