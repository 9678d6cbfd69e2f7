//! Newsbrief - a serverless backend that summarizes news articles.
//!
//! A single API Lambda accepts `{"url": ...}` POSTs from API Gateway and
//! serves summaries either from a DynamoDB cache or freshly computed:
//! fetch the page, extract the readable text, summarize it through the
//! Hugging Face Inference API, then cache the result for a week.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - DynamoDB for the TTL-swept summary cache
//! - the Hugging Face Inference API for abstractive summarization
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use newsbrief::ai::HfClient;
//! use newsbrief::article::HttpArticleFetcher;
//! use newsbrief::cache::DynamoCache;
//! use newsbrief::core::summarize::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     newsbrief::setup_logging();
//!
//!     let pipeline = Pipeline::new(
//!         HttpArticleFetcher::new(),
//!         HfClient::new("dummy_hf_key".to_string(), None),
//!         DynamoCache::from_env("news-summarizer-cache").await,
//!         604_800,
//!     );
//!
//!     let outcome = pipeline.summarize("https://example.com/article").await?;
//!     println!(
//!         "{} ({} words, {}x compression)",
//!         outcome.summary.summary, outcome.summary.word_count, outcome.summary.compression_ratio
//!     );
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod article;
pub mod cache;
pub mod core;
pub mod errors;
pub mod utils;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// newsbrief::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
