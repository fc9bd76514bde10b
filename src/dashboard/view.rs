//! Dashboard view model
//!
//! Everything the page shows, already shaped and coloured. The page script
//! only paints these values; no figure is computed in the browser.

use serde::Serialize;
use serde_json::Value;

use super::scale;
use crate::analysis::{self, SectorCount};
use crate::error::Result;
use crate::types::{Bucket, Summary, WatchlistRow, display_number};

pub const TITLE: &str = "Elite Swing Watchlist Dashboard";
pub const FOOTER: &str = "Elite Swing Scanner • Professional Trading Dashboard";
pub const NO_ALERTS: &str = "No new qualified stocks in this scan.";
pub const DONUT_HOLE: f64 = 0.4;

/// Display headers for the watchlist table, in column order
pub const TABLE_COLUMNS: [&str; 12] = [
    "Ticker",
    "Company",
    "Sector",
    "Stage",
    "Price",
    "1D %",
    "5D %",
    "1M %",
    "From 52W High %",
    "RSI",
    "VCP Contraction",
    "Status",
];

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub last_updated: String,
    pub kpis: Vec<Kpi>,
    pub funnel: Vec<FunnelStep>,
    pub heatmap: Heatmap,
    pub market_cap: Donut,
    pub alerts: AlertFeed,
    pub table: WatchlistTable,
    pub footer: &'static str,
    pub rendered_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunnelStep {
    pub label: String,
    pub count: u64,
    /// Bar width relative to the widest step, 0..=1
    pub width: f64,
    /// Share of the first step; absent when the first step is empty
    pub percent_initial: Option<f64>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub columns: [&'static str; 2],
    pub rows: Vec<HeatmapRow>,
    pub min: usize,
    pub max: usize,
    pub legend: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRow {
    pub sector: String,
    pub cells: [HeatCell; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatCell {
    pub value: usize,
    pub color: String,
    pub label_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Donut {
    pub hole: f64,
    pub total: u64,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: u64,
    pub fraction: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertFeed {
    pub lines: Vec<String>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchlistTable {
    pub columns: [&'static str; 12],
    pub rows: Vec<Vec<Value>>,
}

/// Build the full view for one pass
pub fn render(
    summary: &Summary,
    rows: &[WatchlistRow],
    sectors: &[SectorCount],
) -> Result<DashboardView> {
    Ok(DashboardView {
        title: TITLE,
        last_updated: format!("Last Updated: {}", summary.last_updated),
        kpis: kpis(summary)?,
        funnel: funnel(&summary.stage_distribution),
        heatmap: heatmap(sectors),
        market_cap: donut(&summary.market_cap_distribution),
        alerts: alerts(rows),
        table: table(rows),
        footer: FOOTER,
        rendered_at: rendered_at(),
    })
}

/// Timestamp shown as the page's render time
pub fn rendered_at() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn kpis(summary: &Summary) -> Result<Vec<Kpi>> {
    let kpi = |label, value: String| Kpi { label, value };
    Ok(vec![
        kpi("Total Tracked", summary.total_tracked.to_string()),
        kpi("Qualified", summary.qualified_count.to_string()),
        kpi("Close to Qualified", summary.close_to_qualified.to_string()),
        kpi(
            "Avg Days on Watchlist",
            summary.avg_days_on_watchlist.to_string(),
        ),
        kpi("Scan Timestamp", analysis::scan_time(summary)?.to_string()),
    ])
}

/// `near_qualified` -> `Near Qualified`, `stage_2a` -> `Stage 2A`
pub fn stage_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut after_letter = false;
    for ch in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if ch.is_alphabetic() {
            if after_letter {
                label.extend(ch.to_lowercase());
            } else {
                label.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            label.push(ch);
            after_letter = false;
        }
    }
    label
}

fn funnel(stages: &[Bucket]) -> Vec<FunnelStep> {
    let widest = stages.iter().map(|b| b.count).max().unwrap_or(0);
    let initial = stages.first().map_or(0, |b| b.count);

    stages
        .iter()
        .map(|bucket| {
            let width = if widest == 0 {
                0.0
            } else {
                bucket.count as f64 / widest as f64
            };
            let percent_initial =
                (initial > 0).then(|| bucket.count as f64 * 100.0 / initial as f64);
            let text = match percent_initial {
                Some(pct) => format!("{} · {pct:.0}%", bucket.count),
                None => bucket.count.to_string(),
            };
            FunnelStep {
                label: stage_label(&bucket.name),
                count: bucket.count,
                width,
                percent_initial,
                text,
            }
        })
        .collect()
}

fn heatmap(sectors: &[SectorCount]) -> Heatmap {
    let values = sectors.iter().flat_map(|s| [s.total, s.qualified]);
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    let intensity = |v: usize| {
        if max == min {
            0.0
        } else {
            (v - min) as f64 / (max - min) as f64
        }
    };
    let cell = |value: usize| {
        let t = intensity(value);
        HeatCell {
            value,
            color: scale::yl_or_rd(t),
            label_color: scale::label_color(t),
        }
    };

    Heatmap {
        columns: ["Total", "Qualified"],
        rows: sectors
            .iter()
            .map(|s| HeatmapRow {
                sector: s.sector.clone(),
                cells: [cell(s.total), cell(s.qualified)],
            })
            .collect(),
        min,
        max,
        legend: scale::yl_or_rd_stops(),
    }
}

fn donut(buckets: &[Bucket]) -> Donut {
    let total: u64 = buckets.iter().map(|b| b.count).sum();
    let mut ordered: Vec<&Bucket> = buckets.iter().collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count));

    Donut {
        hole: DONUT_HOLE,
        total,
        slices: ordered
            .into_iter()
            .enumerate()
            .map(|(i, bucket)| Slice {
                label: bucket.name.clone(),
                count: bucket.count,
                fraction: if total == 0 {
                    0.0
                } else {
                    bucket.count as f64 / total as f64
                },
                color: scale::categorical(i),
            })
            .collect(),
    }
}

/// `✅ NVDA | Entry: 497.0 | Stop: 470.5 | R:R 3.2`
pub fn alert_line(row: &WatchlistRow) -> String {
    format!(
        "✅ {} | Entry: {} | Stop: {} | R:R {}",
        row.ticker,
        display_number(row.potential_entry),
        display_number(row.suggested_stop),
        display_number(row.reward_risk_ratio)
    )
}

fn alerts(rows: &[WatchlistRow]) -> AlertFeed {
    let lines: Vec<String> = analysis::qualified_alerts(rows)
        .into_iter()
        .map(alert_line)
        .collect();
    AlertFeed {
        empty_message: lines.is_empty().then_some(NO_ALERTS),
        lines,
    }
}

fn table(rows: &[WatchlistRow]) -> WatchlistTable {
    let rows = analysis::display_order(rows)
        .into_iter()
        .map(|row| {
            vec![
                Value::from(row.ticker.as_str()),
                Value::from(row.company_name.as_str()),
                Value::from(row.sector.as_str()),
                Value::from(row.stage.as_str()),
                Value::from(row.price),
                Value::from(row.price_change_1d),
                Value::from(row.price_change_5d),
                Value::from(row.price_change_1m),
                Value::from(row.distance_from_52w_high),
                Value::from(row.rsi),
                // Sent as text: JSON numbers lose `3` vs `3.0` in the browser
                Value::from(row.vol_contraction.to_string()),
                Value::from(row.status.as_str()),
            ]
        })
        .collect();

    WatchlistTable {
        columns: TABLE_COLUMNS,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::fixtures::{SUMMARY, WATCHLIST_JSON};
    use crate::loader::{parse_summary, parse_watchlist_json};

    fn fixture_view() -> DashboardView {
        let summary = parse_summary(SUMMARY).unwrap();
        let rows = parse_watchlist_json(WATCHLIST_JSON).unwrap();
        let sectors = analysis::sector_breakdown(&rows);
        render(&summary, &rows, &sectors).unwrap()
    }

    fn bucket(name: &str, count: u64) -> Bucket {
        Bucket {
            name: name.to_string(),
            count,
        }
    }

    fn sector(name: &str, total: usize, qualified: usize) -> SectorCount {
        SectorCount {
            sector: name.to_string(),
            total,
            qualified,
        }
    }

    #[test]
    fn test_kpis_verbatim() {
        let view = fixture_view();
        let kpis: Vec<_> = view.kpis.iter().map(|k| (k.label, k.value.as_str())).collect();
        assert_eq!(
            kpis,
            [
                ("Total Tracked", "3"),
                ("Qualified", "1"),
                ("Close to Qualified", "1"),
                ("Avg Days on Watchlist", "6.5"),
                ("Scan Timestamp", "09:30:00"),
            ]
        );
        assert_eq!(view.last_updated, "Last Updated: 2024-01-15 09:30:00");
    }

    #[test]
    fn test_stage_label() {
        assert_eq!(stage_label("near_qualified"), "Near Qualified");
        assert_eq!(stage_label("stage_2a"), "Stage 2A");
        assert_eq!(stage_label("QUALIFIED"), "Qualified");
    }

    #[test]
    fn test_funnel_keeps_stage_order() {
        let steps = funnel(&[
            bucket("watching", 10),
            bucket("setup_forming", 4),
            bucket("qualified", 1),
        ]);
        let labels: Vec<_> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Watching", "Setup Forming", "Qualified"]);
        assert_eq!(steps[1].percent_initial, Some(40.0));
        assert_eq!(steps[1].text, "4 · 40%");
        assert!((steps[2].width - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_funnel_empty_initial_has_no_percent() {
        let steps = funnel(&[bucket("watching", 0), bucket("qualified", 2)]);
        assert!(steps.iter().all(|s| s.percent_initial.is_none()));
        assert_eq!(steps[1].text, "2");
        assert!((steps[1].width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_heatmap_colours_span_global_range() {
        let sectors = vec![sector("Energy", 1, 0), sector("Tech", 4, 2)];
        let map = heatmap(&sectors);
        assert_eq!((map.min, map.max), (0, 4));
        assert_eq!(map.rows[0].cells[1].color, "#ffffcc");
        assert_eq!(map.rows[1].cells[0].color, "#800026");
        assert_eq!(map.rows[1].cells[0].label_color, "#ffffff");
    }

    #[test]
    fn test_heatmap_flat_matrix() {
        let sectors = vec![sector("Tech", 2, 2)];
        let map = heatmap(&sectors);
        assert!(map.rows[0].cells.iter().all(|c| c.color == "#ffffcc"));
    }

    #[test]
    fn test_donut_sorted_by_count() {
        let chart = donut(&[
            bucket("Small Cap", 2),
            bucket("Large Cap", 5),
            bucket("Mid Cap", 2),
        ]);
        let labels: Vec<_> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Large Cap", "Small Cap", "Mid Cap"]);
        assert_eq!(chart.total, 9);
        assert!((chart.slices.iter().map(|s| s.fraction).sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((chart.hole - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_donut_zero_total() {
        let chart = donut(&[bucket("Small Cap", 0)]);
        assert_eq!(chart.slices[0].fraction, 0.0);
    }

    #[test]
    fn test_alert_lines() {
        let view = fixture_view();
        assert_eq!(view.alerts.lines, ["✅ NVDA | Entry: 497.0 | Stop: 470.5 | R:R 3.2"]);
        assert!(view.alerts.empty_message.is_none());
    }

    #[test]
    fn test_alert_empty_state() {
        let rows: Vec<_> = parse_watchlist_json(WATCHLIST_JSON)
            .unwrap()
            .into_iter()
            .filter(|r| !r.is_qualified())
            .collect();
        let feed = alerts(&rows);
        assert!(feed.lines.is_empty());
        assert_eq!(feed.empty_message, Some(NO_ALERTS));
    }

    #[test]
    fn test_table_order_and_headers() {
        let view = fixture_view();
        assert_eq!(view.table.columns[0], "Ticker");
        assert_eq!(view.table.columns[10], "VCP Contraction");

        let order: Vec<_> = view.table.rows.iter().map(|r| r[0].as_str().unwrap()).collect();
        // stage B (rsi 30, 70) before stage A
        assert_eq!(order, ["AMD", "NVDA", "XOM"]);
        assert_eq!(view.table.rows[1][10], Value::from("True"));
        assert_eq!(view.table.rows[0][10], Value::from("0.35"));
        assert!(view.table.rows.iter().all(|r| r.len() == TABLE_COLUMNS.len()));
    }

    #[test]
    fn test_bad_timestamp_fails_render() {
        let mut summary = parse_summary(SUMMARY).unwrap();
        summary.last_updated = "yesterday".into();
        assert!(render(&summary, &[], &[]).is_err());
    }
}
