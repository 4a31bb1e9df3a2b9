//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions and the toast helper live in `assets/js/*.js` and
//! are embedded at compile time. They are evaluated as globals (no ES
//! modules) and exposed via `window.*`. This module serializes arguments
//! with `serde_json` and calls those globals; any JS failure is caught and
//! logged to the console rather than surfacing as a Rust panic.

use swm_view::chart::{ChartKind, ChartSpec};
use swm_view::state::{NoticeKind, Theme};
use wasm_bindgen::JsValue;

// Embed all chart and toast JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static TOAST_JS: &str = include_str!("../assets/js/toast.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SWM JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Install the toast helper. It has no D3 dependency, so it is ready as
/// soon as this returns.
pub fn init_toasts() {
    call_js(&format!(
        "(0, eval)({}); if (typeof swmShowToast !== 'undefined') window.swmShowToast = swmShowToast;",
        js_string(TOAST_JS)
    ));
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderPieChart(...)` via
/// `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, BAR_CHART_JS, LINE_CHART_JS].join("\n");

    call_js(&format!("window.__swmChartScripts = {};", js_string(&all_js)));

    call_js(
        r#"
        (function() {
            if (window.__swmChartsReady || window.__swmChartsPending) { return; }
            window.__swmChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__swmChartScripts);
                    delete window.__swmChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__swmChartsReady = true;
                    console.log('SWM charts initialized');
                }
            }, 100);
        })();
        "#,
    );
}

/// JS renderer for a chart kind.
fn renderer(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Pie => "renderPieChart",
        ChartKind::Bar => "renderBarChart",
        ChartKind::Line => "renderLineChart",
    }
}

/// Render `spec` into the element with id `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
/// Rendering again into the same container replaces the previous chart.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let (data_json, config_json) = match spec.to_json() {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("Failed to serialize chart {}: {}", container_id, e);
            return;
        }
    };
    let func = renderer(spec.kind());
    let id = js_string(container_id);
    let data = js_string(&data_json);
    let config = js_string(&config_json);

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__swmChartsReady &&
                    typeof window.{func} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{func}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[SWM] {func} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = ''; if (window.hideTooltip) window.hideTooltip();",
        js_string(container_id)
    ));
}

/// Show a transient notification. Fire-and-forget.
pub fn show_toast(message: &str, kind: NoticeKind, duration_ms: u32) {
    let kind = match kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };
    call_js(&format!(
        "if (window.swmShowToast) window.swmShowToast({}, '{}', {});",
        js_string(message),
        kind,
        duration_ms
    ));
}

/// Mirror the theme onto the document root as a `dark` class.
pub fn apply_root_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        log::warn!("No document root to apply theme to");
        return;
    };
    let toggled: Result<bool, JsValue> = root.class_list().toggle_with_force("dark", theme.is_dark());
    if let Err(e) = toggled {
        log::warn!("Failed to apply {} theme to document root: {:?}", theme.as_str(), e);
    }
}
