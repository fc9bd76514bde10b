//! Per-isolate render cache
//!
//! Workers reuse an isolate across requests, so the last parsed report can be
//! served again while both artifacts are byte-for-byte unchanged. The key is
//! a SHA-256 of each raw artifact; any upstream rewrite invalidates it.

use std::cell::RefCell;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

use crate::config::WatchlistFormat;
use crate::report::Report;

/// SHA-256 of one raw artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(text: &str) -> Self {
        Self(Sha256::digest(text.as_bytes()).into())
    }

    /// Short form for log lines
    pub fn short(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.0[..6])
    }
}

/// Identity of one render pass's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey {
    pub summary: Fingerprint,
    pub watchlist: Fingerprint,
    pub format: WatchlistFormat,
}

impl CacheKey {
    /// Strong HTTP validator covering both artifacts
    pub fn etag(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.summary.0);
        hasher.update(self.watchlist.0);
        let digest = hasher.finalize();
        format!("\"{}\"", URL_SAFE_NO_PAD.encode(&digest[..16]))
    }
}

/// Whether an `If-None-Match` header already names `etag`.
///
/// Accepts a list of tags, `*`, and the weak `W/` form the edge produces
/// after compressing a response.
pub fn not_modified(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    header.split(',').map(str::trim).any(|tag| {
        tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag.trim_start_matches("W/")
    })
}

thread_local! {
    static LAST_REPORT: RefCell<Option<(CacheKey, Report)>> = const { RefCell::new(None) };
}

/// Cached report for exactly these inputs, as an owned copy
pub fn lookup(key: &CacheKey) -> Option<Report> {
    LAST_REPORT.with(|slot| {
        slot.borrow()
            .as_ref()
            .filter(|(cached, _)| cached == key)
            .map(|(_, report)| report.clone())
    })
}

/// Replace the cached report
pub fn store(key: CacheKey, report: &Report) {
    LAST_REPORT.with(|slot| *slot.borrow_mut() = Some((key, report.clone())));
}

#[cfg(test)]
pub(crate) fn clear() {
    LAST_REPORT.with(|slot| *slot.borrow_mut() = None);
}
