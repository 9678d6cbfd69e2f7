//! Configuration, domain models, and the summarize pipeline

pub mod config;
pub mod models;
pub mod summarize;

// Re-export main types for convenience
pub use config::AppConfig;
pub use summarize::Pipeline;
