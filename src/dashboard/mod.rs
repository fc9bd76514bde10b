//! Dashboard module - watchlist web interface
//!
//! Provides the single-page dashboard over the upstream scan artifacts.
//! Separated into HTML, CSS, and JS submodules for maintainability, plus the
//! server-side view model the page paints.
//!
//! # Architecture
//! - `view.rs`: KPI, funnel, heatmap, donut, alert and table sections
//! - `scale.rs`: colour scales for the charts
//! - `html.rs`: Page structure and layout
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: Fetches `/api/dashboard`, paints sections, table sorting

mod css;
mod html;
mod js;
mod scale;
pub mod view;

/// Generate the complete dashboard HTML page
pub fn dashboard_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>📈</text></svg>">
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script>
{js}
    </script>
</body>
</html>"#,
        title = view::TITLE,
        css = css::STYLES,
        html = html::TEMPLATE,
        js = js::SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_every_section() {
        let page = dashboard_html();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Elite Swing Watchlist Dashboard</title>"));
        for id in ["kpis", "funnel", "heatmap", "marketCap", "alerts", "tableBody", "errorBanner"] {
            assert!(page.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(page.contains("/api/dashboard"));
    }
}
