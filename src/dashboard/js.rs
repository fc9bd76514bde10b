//! Dashboard JavaScript
//!
//! Client-side painting for the watchlist dashboard:
//! - Fetches the rendered view from /api/dashboard
//! - Draws each section from server-computed values
//! - Click-to-sort on table headers
//! - Auto-refresh every 30 seconds, manual refresh button

pub const SCRIPT: &str = r#"
// ============================================================================
// Configuration
// ============================================================================
const CONFIG = {
    refreshInterval: 30000,  // 30 seconds
    apiBase: ''
};

// ============================================================================
// State
// ============================================================================
let tableRows = [];
let sortState = null;  // { column, ascending } once the user clicks a header

// ============================================================================
// Helpers
// ============================================================================
function escapeHtml(value) {
    return String(value ?? '')
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');
}

function formatCell(value) {
    if (value === null || value === undefined) return '';
    if (typeof value === 'boolean') return value ? 'True' : 'False';
    if (typeof value === 'number') return Number.isInteger(value) ? value.toFixed(1) : String(value);
    return escapeHtml(value);
}

function signClass(value) {
    if (typeof value !== 'number') return '';
    if (value > 0) return 'positive';
    if (value < 0) return 'negative';
    return '';
}

// ============================================================================
// Section Painters
// ============================================================================
function paintKpis(kpis) {
    document.getElementById('kpis').innerHTML = kpis.map(k => `
        <div class="card">
            <div class="kpi-label">${escapeHtml(k.label)}</div>
            <div class="kpi-value">${escapeHtml(k.value)}</div>
        </div>`).join('');
}

function paintFunnel(steps) {
    const el = document.getElementById('funnel');
    if (steps.length === 0) {
        el.innerHTML = '<div class="empty">No stages reported</div>';
        return;
    }
    el.innerHTML = steps.map(s => `
        <div class="funnel-step">
            <div class="funnel-label">${escapeHtml(s.label)}</div>
            <div class="funnel-bar" style="width: ${Math.max(s.width * 100, 8)}%">${escapeHtml(s.text)}</div>
        </div>`).join('');
}

function paintHeatmap(map) {
    const el = document.getElementById('heatmap');
    if (map.rows.length === 0) {
        el.innerHTML = '<div class="empty">No sectors</div>';
        return;
    }
    const head = '<tr><th class="sector">Sector</th>' + map.columns.map(c => `<th>${c}</th>`).join('') + '</tr>';
    const body = map.rows.map(r => '<tr><th class="sector">' + escapeHtml(r.sector) + '</th>' +
        r.cells.map(c => `<td style="background: ${c.color}; color: ${c.label_color}">${c.value}</td>`).join('') +
        '</tr>').join('');
    const legend = '<div class="legend">' + map.legend.map(c => `<span style="background: ${c}"></span>`).join('') + '</div>' +
        `<div class="legend-range"><span>${map.min}</span><span>Count</span><span>${map.max}</span></div>`;
    el.innerHTML = `<table class="heatmap">${head}${body}</table>${legend}`;
}

function paintDonut(chart) {
    const el = document.getElementById('marketCap');
    if (chart.total === 0) {
        el.innerHTML = '<div class="empty">No market cap data</div>';
        return;
    }
    let start = 0;
    const stops = chart.slices.map(s => {
        const end = start + s.fraction * 360;
        const stop = `${s.color} ${start}deg ${end}deg`;
        start = end;
        return stop;
    });
    const hole = chart.hole * 100;
    const inset = (100 - hole) / 2;
    const legend = chart.slices.map(s =>
        `<div><span class="swatch" style="background: ${s.color}"></span>${escapeHtml(s.label)}: ${s.count} (${(s.fraction * 100).toFixed(1)}%)</div>`
    ).join('');
    el.innerHTML = `
        <div class="donut" style="background: conic-gradient(${stops.join(', ')})">
            <div class="donut-hole" style="inset: ${inset}%">${chart.total}</div>
        </div>
        <div class="donut-legend">${legend}</div>`;
}

function paintAlerts(feed) {
    const el = document.getElementById('alerts');
    if (feed.lines.length === 0) {
        el.innerHTML = `<div class="info">${escapeHtml(feed.empty_message)}</div>`;
        return;
    }
    el.innerHTML = feed.lines.map(line => `<div class="alert">${escapeHtml(line)}</div>`).join('');
}

function paintTableHead(columns) {
    document.getElementById('tableHead').innerHTML = columns.map((c, i) => {
        const arrow = sortState && sortState.column === i ? (sortState.ascending ? ' ▲' : ' ▼') : '';
        return `<th onclick="sortBy(${i})">${escapeHtml(c)}${arrow}</th>`;
    }).join('');
}

function paintTableBody() {
    const tbody = document.getElementById('tableBody');
    if (tableRows.length === 0) {
        tbody.innerHTML = '<tr><td colspan="12" class="empty">Watchlist is empty</td></tr>';
        return;
    }
    tbody.innerHTML = tableRows.map(row => '<tr>' + row.map((v, i) => {
        const numeric = typeof v === 'number';
        const colour = i >= 5 && i <= 8 ? signClass(v) : '';
        return `<td class="${numeric ? 'num' : ''} ${colour}">${i === 0 ? '<strong>' + formatCell(v) + '</strong>' : formatCell(v)}</td>`;
    }).join('') + '</tr>').join('');
}

// ============================================================================
// Table Sorting
// ============================================================================
function compareCells(a, b) {
    if (typeof a === 'number' && typeof b === 'number') return a - b;
    return String(a ?? '').localeCompare(String(b ?? ''));
}

function applySort() {
    if (!sortState) return;
    const { column, ascending } = sortState;
    // Array.prototype.sort is stable, ties keep server order
    tableRows.sort((x, y) => ascending ? compareCells(x[column], y[column]) : compareCells(y[column], x[column]));
}

function sortBy(column) {
    sortState = sortState && sortState.column === column
        ? { column, ascending: !sortState.ascending }
        : { column, ascending: true };
    applySort();
    paintTableHead(window.lastView.table.columns);
    paintTableBody();
}

// ============================================================================
// Main Update Function
// ============================================================================
function showError(message) {
    const banner = document.getElementById('errorBanner');
    banner.textContent = '❌ ' + message;
    banner.classList.add('visible');
    document.getElementById('content').style.display = 'none';
}

function clearError() {
    document.getElementById('errorBanner').classList.remove('visible');
    document.getElementById('content').style.display = '';
}

async function updateDashboard() {
    let view;
    try {
        const res = await fetch(CONFIG.apiBase + '/api/dashboard', { cache: 'no-cache' });
        view = await res.json();
        if (!res.ok || view.error) {
            const ref = view.request_id ? ` (request ${view.request_id})` : '';
            showError((view.message || `HTTP ${res.status}`) + ref);
            return;
        }
    } catch (e) {
        showError('Dashboard unavailable: ' + e.message);
        return;
    }

    clearError();
    window.lastView = view;
    document.title = view.title;
    document.getElementById('lastUpdated').textContent = view.last_updated;
    document.getElementById('refreshTime').textContent = 'Refreshed: ' + new Date().toLocaleTimeString();
    document.getElementById('footer').textContent = view.footer;

    paintKpis(view.kpis);
    paintFunnel(view.funnel);
    paintHeatmap(view.heatmap);
    paintDonut(view.market_cap);
    paintAlerts(view.alerts);

    tableRows = view.table.rows.slice();
    applySort();
    paintTableHead(view.table.columns);
    paintTableBody();
}

// ============================================================================
// Button Actions
// ============================================================================
async function refreshAll() {
    const btn = document.getElementById('refreshBtn');
    btn.disabled = true;
    btn.textContent = '⏳';

    await updateDashboard();

    btn.disabled = false;
    btn.textContent = '🔄 Refresh';
}

// ============================================================================
// Initialization
// ============================================================================
updateDashboard();
setInterval(updateDashboard, CONFIG.refreshInterval);
"#;
