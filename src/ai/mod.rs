//! Summarization providers and the local fallback

use async_trait::async_trait;

use crate::errors::SummarizeError;

pub mod client;
pub mod fallback;

// Re-export main types for convenience
pub use client::HfClient;

/// Turns article text into a short summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached, rejects the
    /// request, or responds without usable summary text.
    async fn summarize(&self, article_text: &str) -> Result<String, SummarizeError>;
}
