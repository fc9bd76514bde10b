//! Display-oriented reshaping of the loaded artifacts
//!
//! Pure functions over rows; nothing here knows about the page.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::types::{Summary, WatchlistRow};

/// Per-sector row counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorCount {
    pub sector: String,
    pub total: usize,
    pub qualified: usize,
}

/// Time-of-day part of `last_updated` (everything after the first space)
pub fn scan_time(summary: &Summary) -> Result<&str> {
    summary
        .last_updated
        .split_once(' ')
        .map(|(_, time)| time)
        .ok_or_else(|| {
            DashboardError::Malformed(format!(
                "last_updated '{}' is not '<date> <time>'",
                summary.last_updated
            ))
        })
}

/// Group rows by sector, ascending by sector name
pub fn sector_breakdown(rows: &[WatchlistRow]) -> Vec<SectorCount> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.sector.as_str()).or_default();
        entry.0 += 1;
        if row.is_qualified() {
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(sector, (total, qualified))| SectorCount {
            sector: sector.to_string(),
            total,
            qualified,
        })
        .collect()
}

/// Rows currently QUALIFIED, in source order
pub fn qualified_alerts(rows: &[WatchlistRow]) -> Vec<&WatchlistRow> {
    rows.iter().filter(|row| row.is_qualified()).collect()
}

/// Table order: stage descending, then RSI ascending. Stable for equal keys.
pub fn display_order(rows: &[WatchlistRow]) -> Vec<&WatchlistRow> {
    let mut ordered: Vec<&WatchlistRow> = rows.iter().collect();
    ordered.sort_by(|a, b| b.stage.cmp(&a.stage).then_with(|| a.rsi.total_cmp(&b.rsi)));
    ordered
}
