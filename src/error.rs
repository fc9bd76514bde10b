//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Every load failure is fatal for the render pass; nothing here is retried.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifact missing from the configured source
    #[error("Artifact not found: {0}")]
    NotFound(String),

    /// KV storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Well-formed input that is missing or misusing an expected field
    #[error("Malformed artifact: {0}")]
    Malformed(String),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<worker::Error> for DashboardError {
    fn from(err: worker::Error) -> Self {
        DashboardError::Worker(err.to_string())
    }
}

impl From<worker::kv::KvError> for DashboardError {
    fn from(err: worker::kv::KvError) -> Self {
        DashboardError::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

impl From<DashboardError> for worker::Error {
    fn from(err: DashboardError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::NotFound("watchlist_summary.json".into());
        assert_eq!(err.to_string(), "Artifact not found: watchlist_summary.json");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Json(_)));
    }
}
