//! One render pass: load both artifacts, derive, build the view.

use crate::analysis::{self, SectorCount};
use crate::cache::{self, CacheKey, Fingerprint};
use crate::config::Config;
use crate::dashboard::view::{self, DashboardView};
use crate::error::Result;
use crate::loader;
use crate::source::ArtifactSource;
use crate::types::{Summary, WatchlistRow};

/// Everything a pass produces
#[derive(Debug, Clone)]
pub struct Report {
    pub summary: Summary,
    /// Rows in source order
    pub rows: Vec<WatchlistRow>,
    pub sectors: Vec<SectorCount>,
    pub view: DashboardView,
    pub etag: String,
}

/// A finished pass and whether it came from the isolate cache
pub struct Pass {
    pub report: Report,
    pub cache_hit: bool,
    pub summary_fingerprint: Fingerprint,
    pub watchlist_fingerprint: Fingerprint,
}

impl Report {
    /// Derive and render from already-parsed artifacts
    pub fn build(summary: Summary, rows: Vec<WatchlistRow>, etag: String) -> Result<Self> {
        let sectors = analysis::sector_breakdown(&rows);
        let view = view::render(&summary, &rows, &sectors)?;
        Ok(Self {
            summary,
            rows,
            sectors,
            view,
            etag,
        })
    }
}

/// Run a full pass against `source`. Fails on the first load error.
pub async fn run<S: ArtifactSource>(source: &S, config: &Config) -> Result<Pass> {
    let (summary_text, watchlist_text) = futures::try_join!(
        source.fetch(&config.summary_path),
        source.fetch(&config.watchlist_path),
    )?;

    let key = CacheKey {
        summary: Fingerprint::of(&summary_text),
        watchlist: Fingerprint::of(&watchlist_text),
        format: config.watchlist_format,
    };

    if config.cache_enabled {
        if let Some(mut report) = cache::lookup(&key) {
            report.view.rendered_at = view::rendered_at();
            return Ok(Pass {
                report,
                cache_hit: true,
                summary_fingerprint: key.summary,
                watchlist_fingerprint: key.watchlist,
            });
        }
    }

    let summary = loader::parse_summary(&summary_text)?;
    let rows = loader::parse_watchlist(&watchlist_text, config.watchlist_format)?;
    let report = Report::build(summary, rows, key.etag())?;

    if config.cache_enabled {
        cache::store(key, &report);
    }

    Ok(Pass {
        report,
        cache_hit: false,
        summary_fingerprint: key.summary,
        watchlist_fingerprint: key.watchlist,
    })
}
