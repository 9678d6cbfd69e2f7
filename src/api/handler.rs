//! API Lambda handler for summarize requests.
//!
//! This module handles:
//! - CORS preflight requests
//! - Request parsing (proxy events and direct invocations)
//! - Running the summarize pipeline
//! - Mapping outcomes onto API Gateway proxy responses

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::ai::HfClient;
use crate::article::HttpArticleFetcher;
use crate::cache::DynamoCache;
use crate::core::config::AppConfig;
use crate::core::summarize::Pipeline;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Pipeline failures are returned as error response payloads with the
/// matching status code; only configuration problems fail the invocation
/// itself.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!("API Lambda received request: {:?}", event);

    // ========================================================================
    // CORS preflight
    // ========================================================================

    if parsing::http_method(&event.payload).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS")) {
        info!("Answering CORS preflight");
        return Ok(helpers::preflight_response(&config.allowed_origin));
    }

    // ========================================================================
    // Parse the summarize request
    // ========================================================================

    let request = match parsing::parse_request(&event.payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Request parse error: {}", e);
            return Ok(helpers::err_response(
                e.status_code(),
                &e.to_string(),
                &config.allowed_origin,
            ));
        }
    };

    info!(url = %request.url, "Summarize request received");

    // ========================================================================
    // Run the pipeline
    // ========================================================================

    let pipeline = Pipeline::new(
        HttpArticleFetcher::new(),
        HfClient::new(
            config.hugging_face_api_key.clone(),
            config.summarizer_endpoint.clone(),
        ),
        DynamoCache::from_env(&config.cache_table).await,
        config.cache_ttl_seconds,
    )
    .with_fallback_summary(config.fallback_summary);

    match pipeline.summarize(&request.url).await {
        Ok(outcome) => {
            info!(
                url = %request.url,
                from_cache = outcome.source.from_cache(),
                "Summarize request served"
            );
            Ok(helpers::success_response(&outcome, &config.allowed_origin))
        }
        Err(e) => {
            error!(url = %request.url, "Summarize request failed: {}", e);
            Ok(helpers::err_response(
                e.status_code(),
                &e.to_string(),
                &config.allowed_origin,
            ))
        }
    }
}
