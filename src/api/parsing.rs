use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;

use crate::core::models::SummarizeRequest;
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

/// HTTP method of a proxy event, covering both REST (v1) and HTTP API (v2)
/// payload shapes. `None` for direct invocations.
#[must_use]
pub fn http_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

/// Pulls the request body out of a proxy event, decoding base64 transport
/// encoding when API Gateway flags it.
pub fn extract_body(payload: &Value) -> Result<String, SummarizeError> {
    let Some(body) = payload.get("body") else {
        return Err(SummarizeError::InvalidInput("Missing body".to_string()));
    };

    let Some(body_str) = body.as_str() else {
        return Err(SummarizeError::InvalidInput(
            "Invalid body format".to_string(),
        ));
    };

    if payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        let decoded = STANDARD
            .decode(body_str)
            .map_err(|e| SummarizeError::InvalidInput(format!("Invalid base64 body: {e}")))?;
        return String::from_utf8(decoded).map_err(|e| {
            SummarizeError::InvalidInput(format!("Request body is not valid UTF-8: {e}"))
        });
    }

    Ok(body_str.to_string())
}

/// Parses a summarize request from either a proxy event (JSON body) or a
/// direct invocation (fields at the top level of the event).
pub fn parse_request(payload: &Value) -> Result<SummarizeRequest, SummarizeError> {
    let body: Value = match http_method(payload) {
        Some(method) if method.eq_ignore_ascii_case("POST") => {
            let raw = extract_body(payload)?;
            serde_json::from_str(&raw).map_err(|e| {
                SummarizeError::InvalidInput(format!("Request body is not valid JSON: {e}"))
            })?
        }
        _ => payload.clone(),
    };

    serde_json::from_value(body)
        .map_err(|_| SummarizeError::InvalidInput("URL is required".to_string()))
}
