use std::env;

/// Default DynamoDB table holding cached summaries.
pub const DEFAULT_CACHE_TABLE: &str = "news-summarizer-cache";

/// Default cache lifetime: 7 days.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 604_800;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hugging_face_api_key: String,
    pub cache_table: String,
    pub cache_ttl_seconds: u64,
    pub summarizer_endpoint: Option<String>,
    pub allowed_origin: String,
    pub fallback_summary: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let cache_ttl_seconds = match env::var("CACHE_TTL_SECONDS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("CACHE_TTL_SECONDS: {}", e))?,
            Err(_) => DEFAULT_CACHE_TTL_SECONDS,
        };
        Ok(Self {
            hugging_face_api_key: env::var("HUGGING_FACE_API_KEY")
                .map_err(|e| format!("HUGGING_FACE_API_KEY: {}", e))?,
            cache_table: env::var("CACHE_TABLE").unwrap_or_else(|_| DEFAULT_CACHE_TABLE.to_string()),
            cache_ttl_seconds,
            summarizer_endpoint: env::var("SUMMARIZER_ENDPOINT").ok(),
            allowed_origin: env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            fallback_summary: env::var("FALLBACK_SUMMARY")
                .is_ok_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes")),
        })
    }
}
