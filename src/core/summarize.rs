//! The summarize pipeline: validate, check the cache, fetch, summarize,
//! cache the result.

use tracing::{info, warn};
use url::Url;

use crate::ai::{Summarizer, fallback};
use crate::article::ArticleFetcher;
use crate::cache::{SummaryCache, cache_key};
use crate::core::models::{ArticleSummary, SummarizeOutcome, SummarySource};
use crate::errors::SummarizeError;

/// Rejects empty, unparseable, or non-HTTP URLs before any network work.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidInput`] with a client-facing message.
pub fn validate_url(raw: &str) -> Result<(), SummarizeError> {
    if raw.trim().is_empty() {
        return Err(SummarizeError::InvalidInput("URL is required".to_string()));
    }
    let parsed = Url::parse(raw)
        .map_err(|_| SummarizeError::InvalidInput("Invalid URL format".to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(SummarizeError::InvalidInput("Invalid URL format".to_string()));
    }
    Ok(())
}

/// Cache-or-compute pipeline for one summarize request.
///
/// The cache is advisory: lookup and store failures are logged and the
/// request proceeds, so a cache outage costs latency, not availability.
pub struct Pipeline {
    fetcher: Box<dyn ArticleFetcher>,
    summarizer: Box<dyn Summarizer>,
    cache: Box<dyn SummaryCache>,
    ttl_seconds: u64,
    fallback_summary: bool,
}

impl Pipeline {
    pub fn new(
        fetcher: impl ArticleFetcher + 'static,
        summarizer: impl Summarizer + 'static,
        cache: impl SummaryCache + 'static,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            summarizer: Box::new(summarizer),
            cache: Box::new(cache),
            ttl_seconds,
            fallback_summary: false,
        }
    }

    /// Enables the local extractive summary when the provider fails.
    #[must_use]
    pub fn with_fallback_summary(mut self, enabled: bool) -> Self {
        self.fallback_summary = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns [`SummarizeError::InvalidInput`] for a rejected URL,
    /// [`SummarizeError::ExtractError`] when the page has no usable
    /// article text, and [`SummarizeError::UpstreamError`] when no summary
    /// can be generated. Cache failures never surface here.
    pub async fn summarize(&self, url: &str) -> Result<SummarizeOutcome, SummarizeError> {
        validate_url(url)?;
        let key = cache_key(url);

        match self.cache.get(&key).await {
            Ok(Some(summary)) => {
                info!("Returning cached summary for URL: {}", url);
                return Ok(SummarizeOutcome {
                    summary,
                    source: SummarySource::Cache,
                });
            }
            Ok(None) => {}
            Err(e) => warn!("Cache lookup failed, continuing without cache: {}", e),
        }

        info!("Fetching fresh content for URL: {}", url);
        let article = self.fetcher.fetch(url).await?;

        let summary_text = match self.summarizer.summarize(&article.text).await {
            Ok(text) => text,
            Err(e) if self.fallback_summary => {
                warn!("Provider failed, using extractive fallback: {}", e);
                fallback::extractive_summary(&article.text, fallback::DEFAULT_SENTENCE_COUNT)
            }
            Err(e) => return Err(e),
        };

        if summary_text.trim().is_empty() {
            return Err(SummarizeError::UpstreamError(
                "empty summary produced".to_string(),
            ));
        }

        let summary = ArticleSummary::build(url, &article.title, &article.text, summary_text);

        if let Err(e) = self.cache.put(&key, &summary, self.ttl_seconds).await {
            warn!("Failed to cache summary: {}", e);
        }

        info!("Summarized article from: {}", url);
        Ok(SummarizeOutcome {
            summary,
            source: SummarySource::Fresh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("https://example.com/article").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_url_requires_a_value() {
        let err = validate_url("").unwrap_err();
        assert_eq!(err.to_string(), "URL is required");

        let err = validate_url("   ").unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn test_validate_url_rejects_malformed_input() {
        for bad in ["not a url", "example.com/article", "ftp://example.com/file"] {
            let err = validate_url(bad).unwrap_err();
            assert_eq!(err.to_string(), "Invalid URL format", "input: {bad}");
        }
    }

    #[test]
    fn test_validate_url_requires_a_host() {
        let err = validate_url("https:///path-only").unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL format");
    }
}
