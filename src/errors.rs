use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to extract article content: {0}")]
    ExtractError(String),

    #[error("Failed to generate summary: {0}")]
    UpstreamError(String),

    #[error("Cache store unavailable: {0}")]
    StorageError(String),
}

impl SummarizeError {
    /// HTTP status code returned to API Gateway clients for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::ExtractError(_) => 400,
            Self::UpstreamError(_) => 502,
            Self::StorageError(_) => 503,
        }
    }
}
