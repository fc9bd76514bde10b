//! Configuration management for the dashboard

use crate::error::{DashboardError, Result};
use worker::Env;

/// Where the upstream scan job publishes its artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Workers KV namespace, artifact path used as the key
    Kv,
    /// Plain HTTP(S) base URL, artifact path appended
    Http,
}

impl SourceKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "kv" => Ok(SourceKind::Kv),
            "http" | "https" => Ok(SourceKind::Http),
            other => Err(DashboardError::Config(format!(
                "unknown ARTIFACT_SOURCE '{other}' (expected kv or http)"
            ))),
        }
    }
}

/// Layout of the watchlist artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchlistFormat {
    /// Object keyed by ticker with nested metadata/metrics records
    Json,
    /// One row per ticker with dotted column headers
    Csv,
}

impl WatchlistFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(WatchlistFormat::Json),
            "csv" => Ok(WatchlistFormat::Csv),
            other => Err(DashboardError::Config(format!(
                "unknown WATCHLIST_FORMAT '{other}' (expected json or csv)"
            ))),
        }
    }

    /// Infer format from the artifact path extension, defaulting to JSON
    pub fn from_path(path: &str) -> Self {
        if path.to_lowercase().ends_with(".csv") {
            WatchlistFormat::Csv
        } else {
            WatchlistFormat::Json
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Artifact source
    pub source: SourceKind,
    pub kv_binding: String,
    pub base_url: Option<String>,

    /// Artifact paths (KV keys or URL paths)
    pub summary_path: String,
    pub watchlist_path: String,
    pub watchlist_format: WatchlistFormat,

    /// Reuse parsed artifacts while their fingerprints are unchanged
    pub cache_enabled: bool,
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let var = |name: &str| env.var(name).ok().map(|v| v.to_string());

        let watchlist_path =
            var("WATCHLIST_PATH").unwrap_or_else(|| "watchlist_data.json".to_string());
        let watchlist_format = match var("WATCHLIST_FORMAT") {
            Some(v) => WatchlistFormat::parse(&v)?,
            None => WatchlistFormat::from_path(&watchlist_path),
        };

        let config = Self {
            environment: var("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),

            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            source: SourceKind::parse(&var("ARTIFACT_SOURCE").unwrap_or_else(|| "kv".to_string()))?,

            kv_binding: var("ARTIFACT_KV_BINDING").unwrap_or_else(|| "ARTIFACTS".to_string()),

            base_url: var("ARTIFACT_BASE_URL").filter(|v| !v.trim().is_empty()),

            summary_path: var("SUMMARY_PATH")
                .unwrap_or_else(|| "watchlist_summary.json".to_string()),

            watchlist_path,
            watchlist_format,

            cache_enabled: var("CACHE_ENABLED")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.summary_path.trim().is_empty() {
            return Err(DashboardError::Config("SUMMARY_PATH must not be empty".into()));
        }
        if self.watchlist_path.trim().is_empty() {
            return Err(DashboardError::Config("WATCHLIST_PATH must not be empty".into()));
        }
        if self.source == SourceKind::Http && self.base_url.is_none() {
            return Err(DashboardError::Config(
                "ARTIFACT_BASE_URL is required when ARTIFACT_SOURCE is http".into(),
            ));
        }
        if self.source == SourceKind::Kv && self.kv_binding.trim().is_empty() {
            return Err(DashboardError::Config("ARTIFACT_KV_BINDING must not be empty".into()));
        }
        Ok(())
    }

    /// Debug level enables per-pass timing logs
    pub fn verbose(&self) -> bool {
        self.log_level.eq_ignore_ascii_case("debug")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            source: SourceKind::Kv,
            kv_binding: "ARTIFACTS".to_string(),
            base_url: None,
            summary_path: "watchlist_summary.json".to_string(),
            watchlist_path: "watchlist_data.json".to_string(),
            watchlist_format: WatchlistFormat::Json,
            cache_enabled: true,
        }
    }

    #[test]
    fn test_config_defaults_validate() {
        let config = test_config();
        assert!(config.validate().is_ok());
        assert!(config.verbose());
    }

    #[test]
    fn test_http_source_requires_base_url() {
        let mut config = test_config();
        config.source = SourceKind::Http;
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        config.base_url = Some("https://artifacts.example.com/scans".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut config = test_config();
        config.watchlist_path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_inference() {
        assert_eq!(WatchlistFormat::from_path("watchlist_data.csv"), WatchlistFormat::Csv);
        assert_eq!(WatchlistFormat::from_path("exports/WATCHLIST.CSV"), WatchlistFormat::Csv);
        assert_eq!(WatchlistFormat::from_path("watchlist_data.json"), WatchlistFormat::Json);
        assert_eq!(WatchlistFormat::parse(" CSV ").unwrap(), WatchlistFormat::Csv);
        assert!(WatchlistFormat::parse("parquet").is_err());
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(SourceKind::parse("KV").unwrap(), SourceKind::Kv);
        assert_eq!(SourceKind::parse("https").unwrap(), SourceKind::Http);
        assert!(SourceKind::parse("s3").is_err());
    }
}
