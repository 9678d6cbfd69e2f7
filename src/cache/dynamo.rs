use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client as DynamoClient, types::AttributeValue};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::SummaryCache;
use crate::core::models::ArticleSummary;
use crate::errors::SummarizeError;

const ATTR_KEY: &str = "cache_key";
const ATTR_SUMMARY: &str = "summary_data";
const ATTR_CACHED_AT: &str = "cached_at";
const ATTR_TTL: &str = "ttl";

/// Summary cache backed by a DynamoDB table.
///
/// Items carry an epoch-seconds `ttl` attribute for DynamoDB's expiry
/// sweep. The sweep is lazy, so reads re-check the deadline and treat
/// overdue items as absent.
pub struct DynamoCache {
    client: DynamoClient,
    table: String,
}

impl DynamoCache {
    /// Builds a cache over `table` using credentials and region from the
    /// Lambda environment.
    pub async fn from_env(table: &str) -> Self {
        let shared = aws_config::from_env().load().await;
        Self {
            client: DynamoClient::new(&shared),
            table: table.to_string(),
        }
    }

    #[must_use]
    pub fn new(client: DynamoClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }
}

fn build_item(
    key: &str,
    summary_json: String,
    now: DateTime<Utc>,
    ttl_seconds: u64,
) -> HashMap<String, AttributeValue> {
    // Clamp oversized TTLs instead of wrapping the deadline negative.
    let expires_at = now
        .timestamp()
        .saturating_add(i64::try_from(ttl_seconds).unwrap_or(i64::MAX));
    HashMap::from([
        (ATTR_KEY.to_string(), AttributeValue::S(key.to_string())),
        (ATTR_SUMMARY.to_string(), AttributeValue::S(summary_json)),
        (
            ATTR_CACHED_AT.to_string(),
            AttributeValue::S(now.to_rfc3339()),
        ),
        (
            ATTR_TTL.to_string(),
            AttributeValue::N(expires_at.to_string()),
        ),
    ])
}

fn parse_item(
    key: &str,
    item: &HashMap<String, AttributeValue>,
    now_epoch: i64,
) -> Option<ArticleSummary> {
    let Some(expires_at) = item
        .get(ATTR_TTL)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse::<i64>().ok())
    else {
        warn!("Discarding cache entry without a readable ttl for key: {}", key);
        return None;
    };
    if expires_at <= now_epoch {
        info!("Cache entry expired for key: {}", key);
        return None;
    }
    let Some(raw) = item.get(ATTR_SUMMARY).and_then(|v| v.as_s().ok()) else {
        warn!("Discarding cache entry without summary data for key: {}", key);
        return None;
    };
    match serde_json::from_str(raw) {
        Ok(summary) => Some(summary),
        Err(e) => {
            // Unreadable entries are treated as misses and overwritten on
            // the next successful summarize.
            warn!("Discarding unreadable cache entry for key {}: {}", key, e);
            None
        }
    }
}

#[async_trait]
impl SummaryCache for DynamoCache {
    async fn get(&self, key: &str) -> Result<Option<ArticleSummary>, SummarizeError> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(ATTR_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| SummarizeError::StorageError(format!("dynamodb get_item: {e}")))?;

        let Some(item) = resp.item() else {
            return Ok(None);
        };
        Ok(parse_item(key, item, Utc::now().timestamp()))
    }

    async fn put(
        &self,
        key: &str,
        summary: &ArticleSummary,
        ttl_seconds: u64,
    ) -> Result<(), SummarizeError> {
        let summary_json = serde_json::to_string(summary)
            .map_err(|e| SummarizeError::StorageError(format!("summary serialize: {e}")))?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(build_item(key, summary_json, Utc::now(), ttl_seconds)))
            .send()
            .await
            .map_err(|e| SummarizeError::StorageError(format!("dynamodb put_item: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_summary() -> ArticleSummary {
        ArticleSummary {
            url: "https://example.com/article".to_string(),
            title: "Example".to_string(),
            summary: "A short summary.".to_string(),
            word_count: 3,
            original_length: 120,
            compression_ratio: 40.0,
            summarized_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_build_item_sets_ttl_deadline() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let item = build_item("abc123", "{}".to_string(), now, 604_800);

        assert_eq!(item[ATTR_KEY], AttributeValue::S("abc123".to_string()));
        let expires: i64 = item[ATTR_TTL].as_n().unwrap().parse().unwrap();
        assert_eq!(expires, now.timestamp() + 604_800);
        assert_eq!(
            item[ATTR_CACHED_AT],
            AttributeValue::S(now.to_rfc3339())
        );
    }

    #[test]
    fn test_parse_item_returns_fresh_entry() {
        let summary = sample_summary();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let item = build_item(
            "abc123",
            serde_json::to_string(&summary).unwrap(),
            now,
            3600,
        );

        let parsed = parse_item("abc123", &item, now.timestamp() + 10);
        assert_eq!(parsed, Some(summary));
    }

    #[test]
    fn test_parse_item_drops_expired_entry() {
        let summary = sample_summary();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let item = build_item(
            "abc123",
            serde_json::to_string(&summary).unwrap(),
            now,
            3600,
        );

        assert_eq!(parse_item("abc123", &item, now.timestamp() + 3600), None);
        assert_eq!(parse_item("abc123", &item, now.timestamp() + 7200), None);
    }

    #[test]
    fn test_parse_item_drops_corrupt_payload() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let item = build_item("abc123", "not json at all".to_string(), now, 3600);

        assert_eq!(parse_item("abc123", &item, now.timestamp()), None);
    }

    #[test]
    fn test_build_item_clamps_oversized_ttl() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let item = build_item("abc123", "{}".to_string(), now, u64::MAX);

        let expires: i64 = item[ATTR_TTL].as_n().unwrap().parse().unwrap();
        assert_eq!(expires, i64::MAX);
    }

    #[test]
    fn test_parse_item_requires_ttl_attribute() {
        let item = HashMap::from([(
            ATTR_SUMMARY.to_string(),
            AttributeValue::S("{}".to_string()),
        )]);
        assert_eq!(parse_item("abc123", &item, 0), None);

        let item = HashMap::from([
            (
                ATTR_SUMMARY.to_string(),
                AttributeValue::S("{}".to_string()),
            ),
            (ATTR_TTL.to_string(), AttributeValue::S("soon".to_string())),
        ]);
        assert_eq!(parse_item("abc123", &item, 0), None);
    }

    #[test]
    fn test_parse_item_requires_summary_attribute() {
        let item = HashMap::from([(
            ATTR_TTL.to_string(),
            AttributeValue::N(i64::MAX.to_string()),
        )]);

        assert_eq!(parse_item("abc123", &item, 0), None);
    }
}
