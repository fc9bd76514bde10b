//! Watchlist Dashboard - Swing Scanner Report Renderer for Cloudflare Workers
//!
//! Renders a single-page dashboard over the two artifacts an upstream scan
//! job publishes: a summary record and the per-ticker watchlist.
//!
//! # Architecture
//! - Main entry point handles HTTP requests
//! - Artifacts read from KV (or an HTTP location), never written
//! - Each request is one linear pass: load, derive, render
//!
//! # Features
//! - KPI cards, stage funnel, sector heatmap, market-cap donut
//! - Alert feed of QUALIFIED tickers
//! - Sortable watchlist table
//! - Isolate-level cache keyed by artifact fingerprints, ETag revalidation

// Clippy configuration for dashboard code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns

mod analysis;
mod cache;
mod config;
mod dashboard;
mod error;
mod loader;
mod report;
mod source;
mod types;

use serde::Serialize;
use worker::{Context, Env, Request, Response, Router, console_error, console_log, event};

pub use analysis::SectorCount;
pub use config::{Config, SourceKind, WatchlistFormat};
pub use error::DashboardError;
pub use types::*;

use report::Report;

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let router = Router::new();

    router
        // Health check
        .get_async("/health", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": config.environment,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        // Dashboard UI
        .get("/", |_req, _ctx| {
            Response::from_html(dashboard::dashboard_html())
        })
        .get("/dashboard", |_req, _ctx| {
            Response::from_html(dashboard::dashboard_html())
        })
        // Full rendered view, revalidated by ETag
        .get_async("/api/dashboard", |req, ctx| async move {
            let request_id = uuid::Uuid::new_v4().to_string();
            let pass = match render_pass(&ctx.env, &request_id).await {
                Ok(pass) => pass,
                Err(e) => return error_response(&e, &request_id),
            };

            let etag = pass.report.etag.as_str();
            let if_none_match = req.headers().get("If-None-Match")?;
            let mut response = if cache::not_modified(if_none_match.as_deref(), etag) {
                Response::empty()?.with_status(304)
            } else {
                Response::from_json(&pass.report.view)?
            };
            response.headers_mut().set("ETag", etag)?;
            response.headers_mut().set("Cache-Control", "no-cache")?;
            Ok(response)
        })
        // Parsed summary record
        .get_async("/api/summary", |_req, ctx| async move {
            section(&ctx.env, |report| &report.summary).await
        })
        // Display table, sorted
        .get_async("/api/watchlist", |_req, ctx| async move {
            section(&ctx.env, |report| &report.view.table).await
        })
        // Sector aggregation
        .get_async("/api/sectors", |_req, ctx| async move {
            section(&ctx.env, |report| &report.sectors).await
        })
        // QUALIFIED alert lines
        .get_async("/api/alerts", |_req, ctx| async move {
            section(&ctx.env, |report| &report.view.alerts).await
        })
        // Fallback
        .run(req, env)
        .await
}

/// Run one render pass with logging
async fn render_pass(env: &Env, request_id: &str) -> error::Result<report::Pass> {
    let started = chrono::Utc::now();
    let config = Config::from_env(env)?;
    let source = source::Source::from_config(env, &config)?;

    let pass = report::run(&source, &config).await?;

    console_log!(
        "[{}] rendered: summary={} watchlist={} rows={} cache_hit={}",
        request_id,
        pass.summary_fingerprint.short(),
        pass.watchlist_fingerprint.short(),
        pass.report.rows.len(),
        pass.cache_hit
    );
    if config.verbose() {
        console_log!(
            "[{}] pass took {}ms",
            request_id,
            (chrono::Utc::now() - started).num_milliseconds()
        );
    }

    Ok(pass)
}

/// Serve one part of the rendered report as JSON
async fn section<T: Serialize>(
    env: &Env,
    pick: impl FnOnce(&Report) -> &T,
) -> WResult<Response> {
    let request_id = uuid::Uuid::new_v4().to_string();
    match render_pass(env, &request_id).await {
        Ok(pass) => Response::from_json(pick(&pass.report)),
        Err(e) => error_response(&e, &request_id),
    }
}

/// Surface a failed pass: no partial render, just the error
fn error_response(err: &DashboardError, request_id: &str) -> WResult<Response> {
    console_error!("[{}] render failed: {}", request_id, err);

    Ok(Response::from_json(&serde_json::json!({
        "error": true,
        "message": err.to_string(),
        "request_id": request_id,
    }))?
    .with_status(500))
}
