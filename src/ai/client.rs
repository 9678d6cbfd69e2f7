//! Hugging Face Inference API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::Summarizer;
use crate::errors::SummarizeError;

/// Hosted BART model tuned for news summarization.
const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

const REQUEST_TIMEOUT_SECS: u64 = 30;

const SUMMARY_MAX_LENGTH: u32 = 150;
const SUMMARY_MIN_LENGTH: u32 = 40;

/// Client for the Hugging Face Inference API.
pub struct HfClient {
    api_key: String,
    endpoint: String,
}

impl HfClient {
    #[must_use]
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

fn request_body(article_text: &str) -> Value {
    json!({
        "inputs": article_text,
        "parameters": {
            "max_length": SUMMARY_MAX_LENGTH,
            "min_length": SUMMARY_MIN_LENGTH,
            "do_sample": false
        }
    })
}

/// Pulls the summary text out of a provider response. Hosted models answer
/// with `[{"summary_text": ...}]`, dedicated endpoints with a bare object.
fn extract_summary_text(response: &Value) -> Option<String> {
    if let Some(first) = response.as_array().and_then(|items| items.first()) {
        return first
            .get("summary_text")
            .and_then(Value::as_str)
            .map(std::string::ToString::to_string);
    }
    response
        .get("summary_text")
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
}

#[async_trait]
impl Summarizer for HfClient {
    async fn summarize(&self, article_text: &str) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Summarization request body:\n{}", request_body(article_text));

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary for {} chars of article text",
            article_text.len()
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                SummarizeError::UpstreamError(format!("Failed to build provider HTTP client: {e}"))
            })?;

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body(article_text))
            .send()
            .await
            .map_err(|e| SummarizeError::UpstreamError(format!("provider request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::UpstreamError(format!(
                "provider error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::UpstreamError(format!("Failed to parse provider response: {e}"))
        })?;

        let summary = extract_summary_text(&response_json).ok_or_else(|| {
            SummarizeError::UpstreamError("No summary text in response".to_string())
        })?;

        if summary.trim().is_empty() {
            return Err(SummarizeError::UpstreamError(
                "provider returned an empty summary".to_string(),
            ));
        }

        Ok(summary)
    }
}
