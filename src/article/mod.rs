//! Article retrieval and readable-text extraction

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::errors::SummarizeError;

pub mod extract;

// Re-export main types for convenience
pub use extract::extract_article;

const FETCH_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Browser User-Agent; several news sites refuse requests without one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Static client to reuse connections across warm invocations
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

/// An article reduced to its readable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

/// Fetches a URL and extracts its article content.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or holds no usable
    /// article text.
    async fn fetch(&self, url: &str) -> Result<Article, SummarizeError>;
}

/// Production fetcher: HTTP GET followed by HTML extraction.
#[derive(Debug, Default)]
pub struct HttpArticleFetcher;

impl HttpArticleFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<Article, SummarizeError> {
        let response = CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| SummarizeError::ExtractError(format!("article fetch failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::ExtractError(format!(
                "article fetch returned status {status}"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SummarizeError::ExtractError(format!("failed to read article body: {e}")))?;

        extract_article(&html)
    }
}
