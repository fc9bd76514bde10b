//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Header with last-updated caption and refresh control
//! - KPI cards
//! - Stage funnel, sector heatmap, market-cap donut
//! - Alert feed
//! - Sortable watchlist table

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1 id="title">📈 Elite Swing Watchlist Dashboard</h1>
                <span class="caption" id="lastUpdated">Loading...</span>
            </div>
            <div class="header-controls">
                <span class="caption" id="refreshTime"></span>
                <button class="btn btn-secondary" onclick="refreshAll()" id="refreshBtn">🔄 Refresh</button>
            </div>
        </header>

        <div class="error-banner" id="errorBanner"></div>

        <main id="content">
            <div class="kpis" id="kpis"></div>

            <div class="grid">
                <!-- Stage Funnel -->
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">🔄 Stage Funnel</span>
                    </div>
                    <div id="funnel"></div>
                </div>

                <!-- Sector Heatmap -->
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">🔥 Sector Heatmap</span>
                    </div>
                    <div id="heatmap"></div>
                </div>

                <!-- Market Cap -->
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">🏦 Market Cap Distribution</span>
                    </div>
                    <div class="donut-wrap" id="marketCap"></div>
                </div>

                <!-- Alert Feed -->
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">🚨 Alert Feed</span>
                    </div>
                    <div id="alerts"></div>
                </div>

                <!-- Watchlist Table -->
                <div class="card wide">
                    <div class="card-header">
                        <span class="card-title">📋 Watchlist Table</span>
                    </div>
                    <div class="table-wrap">
                        <table class="watchlist-table">
                            <thead><tr id="tableHead"></tr></thead>
                            <tbody id="tableBody"></tbody>
                        </table>
                    </div>
                </div>
            </div>
        </main>

        <footer id="footer"></footer>
    </div>
"#;
