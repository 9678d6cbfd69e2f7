//! Response builders for the API Gateway proxy format.
//!
//! Lambda proxy integration expects `{"statusCode", "headers", "body"}`
//! with `body` carried as a JSON string rather than a nested object.

use serde_json::{Value, json};

use crate::core::models::SummarizeOutcome;

// ============================================================================
// CORS
// ============================================================================

/// Headers attached to every response so browser clients on other origins
/// can call the API.
#[must_use]
pub fn cors_headers(allowed_origin: &str) -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": allowed_origin,
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type"
    })
}

/// Returns a 200 OK response acknowledging a CORS preflight.
#[must_use]
pub fn preflight_response(allowed_origin: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(allowed_origin),
        "body": json!({ "message": "CORS preflight success" }).to_string()
    })
}

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response wrapping a summary in the success envelope.
#[must_use]
pub fn success_response(outcome: &SummarizeOutcome, allowed_origin: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(allowed_origin),
        "body": json!({
            "success": true,
            "data": outcome.summary,
            "from_cache": outcome.source.from_cache()
        })
        .to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str, allowed_origin: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(allowed_origin),
        "body": json!({ "success": false, "error": message }).to_string()
    })
}
