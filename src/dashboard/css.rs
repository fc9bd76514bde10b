//! Dashboard CSS styles
//!
//! Contains all styling for the watchlist dashboard UI.
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
    --yellow: #d29922;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1400px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.caption { font-size: 12px; color: var(--text-dim); margin-top: 4px; display: block; }

.header-controls { display: flex; align-items: center; gap: 12px; }

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-secondary { background: var(--border); color: var(--text); }
.btn-secondary:hover:not(:disabled) { background: #3d444d; }

/* Error banner */
.error-banner {
    display: none;
    background: rgba(248, 81, 73, 0.12);
    border: 1px solid var(--red);
    color: var(--red);
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 16px;
    font-size: 14px;
    white-space: pre-wrap;
}

.error-banner.visible { display: block; }

/* KPI row */
.kpis {
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 16px;
    margin-bottom: 16px;
}

.kpi-label { font-size: 12px; color: var(--text-dim); text-transform: uppercase; letter-spacing: 0.5px; }
.kpi-value { font-size: 28px; font-weight: 700; margin-top: 6px; }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
    gap: 16px;
}

.wide { grid-column: 1 / -1; }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 16px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.empty { color: var(--text-dim); text-align: center; padding: 20px 0; }

/* Funnel */
.funnel-step { display: flex; flex-direction: column; align-items: center; margin-bottom: 6px; }

.funnel-bar {
    height: 44px;
    min-width: 2px;
    background: var(--blue);
    border-radius: 4px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    font-size: 13px;
    font-weight: 600;
    white-space: nowrap;
}

.funnel-label { font-size: 12px; color: var(--text-dim); margin-bottom: 2px; }

/* Heatmap */
.heatmap { width: 100%; border-collapse: separate; border-spacing: 3px; }
.heatmap th { color: var(--text-dim); font-size: 12px; font-weight: 500; padding: 6px; }
.heatmap th.sector { text-align: right; }
.heatmap td { text-align: center; padding: 10px; border-radius: 4px; font-weight: 600; font-size: 13px; }

.legend { display: flex; height: 10px; margin-top: 12px; border-radius: 4px; overflow: hidden; }
.legend span { flex: 1; }
.legend-range { display: flex; justify-content: space-between; font-size: 11px; color: var(--text-dim); margin-top: 4px; }

/* Donut */
.donut-wrap { display: flex; align-items: center; gap: 24px; flex-wrap: wrap; }
.donut { width: 220px; height: 220px; border-radius: 50%; position: relative; flex-shrink: 0; }
.donut-hole {
    position: absolute;
    border-radius: 50%;
    background: var(--card);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 20px;
    font-weight: 700;
}

.donut-legend { display: flex; flex-direction: column; gap: 8px; font-size: 13px; }
.swatch { display: inline-block; width: 12px; height: 12px; border-radius: 3px; margin-right: 8px; vertical-align: middle; }

/* Alert feed */
.alert {
    background: rgba(63, 185, 80, 0.12);
    color: var(--green);
    border-radius: 8px;
    padding: 12px 16px;
    margin-bottom: 8px;
    font-size: 14px;
}

.info {
    background: rgba(88, 166, 255, 0.1);
    color: var(--blue);
    border-radius: 8px;
    padding: 12px 16px;
    font-size: 14px;
}

/* Watchlist Table */
.table-wrap { max-height: 450px; overflow-y: auto; }
.watchlist-table { width: 100%; border-collapse: collapse; }

.watchlist-table th,
.watchlist-table td {
    text-align: left;
    padding: 8px;
    border-bottom: 1px solid var(--border);
    font-size: 13px;
    white-space: nowrap;
}

.watchlist-table th {
    position: sticky;
    top: 0;
    background: var(--card);
    color: var(--text-dim);
    font-weight: 500;
    font-size: 12px;
    text-transform: uppercase;
    cursor: pointer;
    user-select: none;
}

.watchlist-table th:hover { color: var(--text); }
.watchlist-table td.num { text-align: right; font-variant-numeric: tabular-nums; }

/* Colors */
.positive { color: var(--green); }
.negative { color: var(--red); }

footer { margin-top: 24px; text-align: center; font-size: 12px; color: var(--text-dim); }

/* Responsive */
@media (max-width: 900px) {
    .kpis { grid-template-columns: repeat(2, 1fr); }
    .grid { grid-template-columns: 1fr; }
    header { flex-direction: column; gap: 12px; }
}
";
