//! Summary cache: key derivation, the store trait, and the DynamoDB backend

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::core::models::ArticleSummary;
use crate::errors::SummarizeError;

pub mod dynamo;

// Re-export main types for convenience
pub use dynamo::DynamoCache;

/// Derives the cache key for a URL: lowercase hex SHA-256 of the exact
/// URL string. Deterministic across handler instances so concurrent
/// invocations for the same URL converge on one entry.
#[must_use]
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}

/// Store for summaries keyed by [`cache_key`].
///
/// The cache is advisory: callers treat lookup failures as misses and
/// continue, so an outage degrades latency rather than availability.
#[async_trait]
pub trait SummaryCache: Send + Sync {
    /// Looks up a cached summary. `None` means absent or past expiration.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or the read fails.
    async fn get(&self, key: &str) -> Result<Option<ArticleSummary>, SummarizeError>;

    /// Stores a summary, eligible for removal once `ttl_seconds` elapse.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or the write fails.
    async fn put(
        &self,
        key: &str,
        summary: &ArticleSummary,
        ttl_seconds: u64,
    ) -> Result<(), SummarizeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_stable() {
        assert_eq!(
            cache_key("https://example.com/article"),
            "632538290468e7a39c06323c9e3ae98f31072d641cbb37ea37917f56bbeb5539"
        );
    }

    #[test]
    fn test_cache_key_differs_per_url() {
        assert_ne!(
            cache_key("https://example.com/article"),
            cache_key("https://example.com/other")
        );
    }

    #[test]
    fn test_cache_key_is_lowercase_hex() {
        let key = cache_key("https://www.bbc.com/news/technology-58289753");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
