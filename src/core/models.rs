use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::text::word_count;

/// Body of a summarize request: `{"url": "https://..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// A summarized article. Serves as both the API response payload and the
/// value serialized into the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub url: String,
    pub title: String,
    pub summary: String,
    /// Words in the summary.
    pub word_count: usize,
    /// Words in the extracted article text.
    pub original_length: usize,
    /// Original words per summary word, rounded to two decimals.
    pub compression_ratio: f64,
    pub summarized_at: DateTime<Utc>,
}

impl ArticleSummary {
    /// Assembles a summary record from the extracted article and the
    /// generated summary text, stamped with the current time.
    #[must_use]
    pub fn build(url: &str, title: &str, article_text: &str, summary: String) -> Self {
        let original_length = word_count(article_text);
        let words = word_count(&summary);
        Self {
            url: url.to_string(),
            title: title.to_string(),
            summary,
            word_count: words,
            original_length,
            compression_ratio: compression_ratio(original_length, words),
            summarized_at: Utc::now(),
        }
    }
}

/// Ratio of original article words to summary words. Zero-length summaries
/// yield 0.0 rather than dividing by zero.
#[must_use]
pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
    if summary_words == 0 {
        return 0.0;
    }
    let ratio = original_words as f64 / summary_words as f64;
    (ratio * 100.0).round() / 100.0
}

/// Where a served summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    Cache,
    Fresh,
}

impl SummarySource {
    #[must_use]
    pub const fn from_cache(self) -> bool {
        matches!(self, Self::Cache)
    }
}

/// Result of running the summarize pipeline for one URL.
#[derive(Debug, Clone)]
pub struct SummarizeOutcome {
    pub summary: ArticleSummary,
    pub source: SummarySource,
}
