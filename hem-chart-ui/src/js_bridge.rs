//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals.

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static COLUMN_CHART_JS: &str = include_str!("../assets/js/column-chart.js");
static COMBO_CHART_JS: &str = include_str!("../assets/js/combo-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HEM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderColumnChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect `eval()` once D3 is ready, and then
/// explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, COLUMN_CHART_JS, COMBO_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__hemChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__hemChartScripts);
                    delete window.__hemChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderColumnChart !== 'undefined') window.renderColumnChart = renderColumnChart;
                    if (typeof renderComboChart !== 'undefined') window.renderComboChart = renderComboChart;
                    if (typeof destroyColumnChart !== 'undefined') window.destroyColumnChart = destroyColumnChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__hemChartsReady = true;
                    console.log('HEM charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a column chart of one metric series.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_column_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hemChartsReady &&
                    typeof window.renderColumnChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderColumnChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HEM] renderColumnChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render metric columns with an optional temperature line overlay.
///
/// `overlay_json` is a bare value array aligned positionally with the
/// columns; pass `[]` for no overlay. Same polling guard as the column
/// chart.
pub fn render_combo_chart(
    container_id: &str,
    data_json: &str,
    overlay_json: &str,
    config_json: &str,
) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_overlay = overlay_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hemChartsReady &&
                    typeof window.renderComboChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderComboChart('{container_id}', '{escaped_data}', '{escaped_overlay}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HEM] renderComboChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Toggle the document-level dark theme class.
pub fn apply_theme(dark: bool) {
    let op = if dark { "add" } else { "remove" };
    call_js(&format!(
        "document.documentElement.classList.{op}('dark');"
    ));
}
