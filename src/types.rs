//! Common types for the dashboard
//!
//! The two upstream artifacts as they look once loaded: the summary record
//! and one flattened row per watchlist ticker.

use serde::{Deserialize, Serialize};

/// Status value meaning the ticker currently passes the upstream screen
pub const QUALIFIED: &str = "QUALIFIED";

/// Flattened watchlist columns, in upstream export order
pub const WATCHLIST_COLUMNS: [&str; 15] = [
    "ticker",
    "metadata.company_name",
    "metadata.sector",
    "stage",
    "metrics.price",
    "metrics.price_change_1d",
    "metrics.price_change_5d",
    "metrics.price_change_1m",
    "metrics.distance_from_52w_high",
    "metrics.status",
    "metrics.details.rsi",
    "metrics.details.vol_contraction",
    "metrics.details.potential_entry",
    "metrics.details.suggested_stop",
    "metrics.details.reward_risk_ratio",
];

/// One named count in a summary distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub count: u64,
}

/// Aggregate record written by the upstream scan job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// `"<date> <time>"`
    pub last_updated: String,
    pub total_tracked: u64,
    pub qualified_count: u64,
    pub close_to_qualified: u64,
    /// Kept as the raw JSON number so it displays exactly as written
    pub avg_days_on_watchlist: serde_json::Number,
    /// Stage name -> count, in upstream order
    #[serde(with = "ordered_counts")]
    pub stage_distribution: Vec<Bucket>,
    /// Market-cap bucket -> count, in upstream order
    #[serde(with = "ordered_counts")]
    pub market_cap_distribution: Vec<Bucket>,
}

/// Volatility-contraction indicator, passed through from upstream untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VolContraction {
    Flag(bool),
    /// Raw number, so `3` stays `3` and `0.35` stays `0.35`
    Value(serde_json::Number),
    Text(String),
    Absent,
}

impl std::fmt::Display for VolContraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolContraction::Flag(true) => write!(f, "True"),
            VolContraction::Flag(false) => write!(f, "False"),
            VolContraction::Value(v) => write!(f, "{v}"),
            VolContraction::Text(s) => write!(f, "{s}"),
            VolContraction::Absent => Ok(()),
        }
    }
}

/// One watchlist ticker, flattened to dotted column names.
///
/// Deserializes directly from the flat CSV export; the nested JSON export is
/// flattened into this shape by the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistRow {
    pub ticker: String,
    #[serde(rename = "metadata.company_name")]
    pub company_name: String,
    #[serde(rename = "metadata.sector")]
    pub sector: String,
    pub stage: String,
    #[serde(rename = "metrics.price")]
    pub price: f64,
    #[serde(rename = "metrics.price_change_1d")]
    pub price_change_1d: f64,
    #[serde(rename = "metrics.price_change_5d")]
    pub price_change_5d: f64,
    #[serde(rename = "metrics.price_change_1m")]
    pub price_change_1m: f64,
    #[serde(rename = "metrics.distance_from_52w_high")]
    pub distance_from_52w_high: f64,
    #[serde(rename = "metrics.status")]
    pub status: String,
    #[serde(rename = "metrics.details.rsi")]
    pub rsi: f64,
    #[serde(rename = "metrics.details.vol_contraction")]
    pub vol_contraction: VolContraction,
    #[serde(rename = "metrics.details.potential_entry")]
    pub potential_entry: f64,
    #[serde(rename = "metrics.details.suggested_stop")]
    pub suggested_stop: f64,
    #[serde(rename = "metrics.details.reward_risk_ratio")]
    pub reward_risk_ratio: f64,
}

impl WatchlistRow {
    pub fn is_qualified(&self) -> bool {
        self.status == QUALIFIED
    }
}

/// Format a float the way the upstream scanner prints it: integral values
/// keep a trailing `.0`, everything else uses the shortest round-trip form.
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// JSON object <-> ordered `Vec<Bucket>`.
///
/// Relies on serde_json's `preserve_order` so keys come back in file order.
mod ordered_counts {
    use super::Bucket;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(buckets: &[Bucket], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(buckets.iter().map(|b| (&b.name, b.count)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Bucket>, D::Error> {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        map.into_iter()
            .map(|(name, value)| match value.as_u64() {
                Some(count) => Ok(Bucket { name, count }),
                None => Err(D::Error::custom(format!(
                    "count for '{name}' must be a non-negative integer, got {value}"
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_keeps_file_order() {
        let json = r#"{
            "last_updated": "2024-01-15 09:30:00",
            "total_tracked": 6,
            "qualified_count": 1,
            "close_to_qualified": 2,
            "avg_days_on_watchlist": 4.5,
            "stage_distribution": {"watching": 3, "setup_forming": 2, "qualified": 1},
            "market_cap_distribution": {"Small": 1, "Large": 5}
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();

        let names: Vec<_> = summary.stage_distribution.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["watching", "setup_forming", "qualified"]);
        assert_eq!(
            summary.market_cap_distribution[1],
            Bucket {
                name: "Large".into(),
                count: 5,
            }
        );

        let back = serde_json::to_value(&summary).unwrap();
        assert_eq!(back["stage_distribution"]["setup_forming"], 2);
    }

    #[test]
    fn test_negative_count_rejected() {
        let json = r#"{
            "last_updated": "2024-01-15 09:30:00",
            "total_tracked": 1, "qualified_count": 0, "close_to_qualified": 0,
            "avg_days_on_watchlist": 1,
            "stage_distribution": {"watching": -1},
            "market_cap_distribution": {}
        }"#;
        let err = serde_json::from_str::<Summary>(json).unwrap_err();
        assert!(err.to_string().contains("watching"));
    }

    #[test]
    fn test_vol_contraction_passthrough() {
        let flag: VolContraction = serde_json::from_str("true").unwrap();
        let value: VolContraction = serde_json::from_str("0.42").unwrap();
        let text: VolContraction = serde_json::from_str("\"3T\"").unwrap();
        let absent: VolContraction = serde_json::from_str("null").unwrap();

        assert_eq!(flag.to_string(), "True");
        assert_eq!(value.to_string(), "0.42");
        assert_eq!(text.to_string(), "3T");
        assert_eq!(absent.to_string(), "");
    }

    #[test]
    fn test_vol_contraction_keeps_integer_form() {
        let count: VolContraction = serde_json::from_str("3").unwrap();
        let float: VolContraction = serde_json::from_str("3.0").unwrap();

        assert_eq!(count, VolContraction::Value(3.into()));
        assert_eq!(count.to_string(), "3");
        assert_eq!(float.to_string(), "3.0");
        assert_eq!(serde_json::to_string(&count).unwrap(), "3");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(101.0), "101.0");
        assert_eq!(display_number(2.35), "2.35");
        assert_eq!(display_number(-0.5), "-0.5");
    }
}
