//! Artifact parsing
//!
//! Turns raw artifact text into a `Summary` and flattened `WatchlistRow`s.
//! Any missing key or column aborts the load; there are no defaults.

use serde::Deserialize;

use crate::config::WatchlistFormat;
use crate::error::{DashboardError, Result};
use crate::types::{Summary, VolContraction, WATCHLIST_COLUMNS, WatchlistRow};

/// Nested watchlist entry as written in the JSON export
#[derive(Debug, Deserialize)]
struct NestedEntry {
    /// Overrides the object key when present
    ticker: Option<String>,
    metadata: Metadata,
    stage: String,
    metrics: Metrics,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    company_name: String,
    sector: String,
}

#[derive(Debug, Deserialize)]
struct Metrics {
    price: f64,
    price_change_1d: f64,
    price_change_5d: f64,
    price_change_1m: f64,
    distance_from_52w_high: f64,
    status: String,
    details: Details,
}

#[derive(Debug, Deserialize)]
struct Details {
    rsi: f64,
    vol_contraction: VolContraction,
    potential_entry: f64,
    suggested_stop: f64,
    reward_risk_ratio: f64,
}

impl NestedEntry {
    fn flatten(self, key: String) -> WatchlistRow {
        let NestedEntry { ticker, metadata, stage, metrics } = self;
        let Metrics {
            price,
            price_change_1d,
            price_change_5d,
            price_change_1m,
            distance_from_52w_high,
            status,
            details,
        } = metrics;

        WatchlistRow {
            ticker: ticker.unwrap_or(key),
            company_name: metadata.company_name,
            sector: metadata.sector,
            stage,
            price,
            price_change_1d,
            price_change_5d,
            price_change_1m,
            distance_from_52w_high,
            status,
            rsi: details.rsi,
            vol_contraction: details.vol_contraction,
            potential_entry: details.potential_entry,
            suggested_stop: details.suggested_stop,
            reward_risk_ratio: details.reward_risk_ratio,
        }
    }
}

/// Parse the summary record
pub fn parse_summary(text: &str) -> Result<Summary> {
    serde_json::from_str(text).map_err(DashboardError::from)
}

/// Parse the watchlist in the given layout, keeping source order
pub fn parse_watchlist(text: &str, format: WatchlistFormat) -> Result<Vec<WatchlistRow>> {
    match format {
        WatchlistFormat::Json => parse_watchlist_json(text),
        WatchlistFormat::Csv => parse_watchlist_csv(text),
    }
}

/// Nested export: `{ "<ticker>": { metadata, stage, metrics }, ... }`
///
/// The scan job's JSON writer emits a bare `NaN` for an undefined float.
/// That is not JSON, so a single `NaN` anywhere fails the whole load.
pub fn parse_watchlist_json(text: &str) -> Result<Vec<WatchlistRow>> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;

    entries
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value::<NestedEntry>(value)
                .map(|entry| entry.flatten(key.clone()))
                .map_err(|e| DashboardError::Malformed(format!("watchlist entry '{key}': {e}")))
        })
        .collect()
}

/// Flat export with dotted headers. Unknown columns are ignored.
pub fn parse_watchlist_csv(text: &str) -> Result<Vec<WatchlistRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if let Some(missing) = WATCHLIST_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(DashboardError::Malformed(format!(
            "watchlist csv is missing column '{missing}'"
        )));
    }

    reader
        .deserialize::<WatchlistRow>()
        .map(|row| row.map_err(DashboardError::from))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_summary_well_formed() {
        let summary = parse_summary(SUMMARY).unwrap();
        assert_eq!(summary.last_updated, "2024-01-15 09:30:00");
        assert_eq!(summary.total_tracked, 3);
        assert_eq!(summary.qualified_count, 1);
        assert_eq!(summary.close_to_qualified, 1);
        assert_eq!(summary.avg_days_on_watchlist.to_string(), "6.5");
        assert_eq!(summary.stage_distribution.len(), 3);
        assert_eq!(summary.market_cap_distribution.len(), 2);
    }

    #[test]
    fn test_summary_missing_key_fails() {
        let text = SUMMARY.replace("\"close_to_qualified\": 1,", "");
        let err = parse_summary(&text).unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
        assert!(err.to_string().contains("close_to_qualified"));
    }

    #[test]
    fn test_summary_malformed_fails() {
        assert!(parse_summary("{ not json").is_err());
        assert!(parse_summary("").is_err());
    }

    #[test]
    fn test_json_watchlist_flattens_in_order() {
        let rows = parse_watchlist_json(WATCHLIST_JSON).unwrap();
        let tickers: Vec<_> = rows.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, ["NVDA", "AMD", "XOM"]);

        let nvda = &rows[0];
        assert_eq!(nvda.company_name, "NVIDIA Corp");
        assert_eq!(nvda.sector, "Technology");
        assert!(nvda.is_qualified());
        assert_eq!(nvda.vol_contraction, VolContraction::Flag(true));
        assert!((nvda.reward_risk_ratio - 3.2).abs() < 1e-9);

        // Key used when the entry carries no ticker of its own
        assert_eq!(rows[1].ticker, "AMD");
    }

    #[test]
    fn test_json_watchlist_missing_field_names_ticker() {
        let text = WATCHLIST_JSON.replace("\"rsi\": 50.0, ", "");
        let err = parse_watchlist_json(&text).unwrap_err();
        assert!(matches!(err, DashboardError::Malformed(_)));
        assert!(err.to_string().contains("XOM"));
        assert!(err.to_string().contains("rsi"));
    }

    #[test]
    fn test_json_watchlist_nan_fails_whole_load() {
        let text = WATCHLIST_JSON.replace("\"rsi\": 30.0", "\"rsi\": NaN");
        assert!(matches!(parse_watchlist_json(&text), Err(DashboardError::Json(_))));
    }

    #[test]
    fn test_csv_matches_json() {
        let from_csv = parse_watchlist_csv(WATCHLIST_CSV).unwrap();
        let from_json = parse_watchlist_json(WATCHLIST_JSON).unwrap();

        assert_eq!(from_csv.len(), from_json.len());
        assert_eq!(from_csv[0].ticker, from_json[0].ticker);
        assert_eq!(from_csv[1].vol_contraction, from_json[1].vol_contraction);
        assert_eq!(from_csv[1].vol_contraction.to_string(), "0.35");
        assert_eq!(from_csv[2].company_name, "Exxon Mobil, Inc.");
        // The CSV export writes booleans capitalised; they pass through as text
        assert_eq!(from_csv[0].vol_contraction.to_string(), "True");
    }

    #[test]
    fn test_csv_integer_vcp_displays_as_written() {
        let text = WATCHLIST_CSV.replace(",True,", ",3,");
        let rows = parse_watchlist_csv(&text).unwrap();
        assert_eq!(rows[0].vol_contraction, VolContraction::Value(3.into()));
        assert_eq!(rows[0].vol_contraction.to_string(), "3");
    }

    #[test]
    fn test_csv_missing_column_fails() {
        let text = WATCHLIST_CSV.replace("metrics.details.rsi", "rsi");
        let err = parse_watchlist_csv(&text).unwrap_err();
        assert!(err.to_string().contains("metrics.details.rsi"));
    }

    #[test]
    fn test_csv_bad_value_fails() {
        let text = WATCHLIST_CSV.replace("495.2", "n/a");
        assert!(matches!(parse_watchlist_csv(&text), Err(DashboardError::Csv(_))));
    }

    #[test]
    fn test_parse_watchlist_dispatch() {
        assert_eq!(parse_watchlist(WATCHLIST_CSV, WatchlistFormat::Csv).unwrap().len(), 3);
        assert_eq!(parse_watchlist(WATCHLIST_JSON, WatchlistFormat::Json).unwrap().len(), 3);
        assert!(parse_watchlist(WATCHLIST_CSV, WatchlistFormat::Json).is_err());
    }
}
