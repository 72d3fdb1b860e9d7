//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart lives in `assets/js/line-chart.js` and is embedded at
//! compile time. It is evaluated as a global script once D3 has loaded and
//! exposed via `window.renderLineChart` / `window.destroyLineChart`.

use forecast_api::series::ChartSeries;
use serde::Serialize;

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Rendering options passed to `renderLineChart`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub color: String,
    /// Unit shown in point tooltips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,
}

impl ChartConfig {
    pub fn new(color: &str) -> Self {
        Self {
            width: 800,
            height: 400,
            color: color.to_string(),
            value_label: None,
        }
    }

    pub fn with_value_label(mut self, label: &str) -> Self {
        self.value_label = Some(label.to_string());
        self
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Forecast JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is stored on `window` and evaluated at global scope (indirect
/// eval) once D3 is present, so its function declarations become globals.
/// Safe to call more than once.
pub fn init_charts() {
    call_js(&init_script(LINE_CHART_JS));
}

fn init_script(chart_js: &str) -> String {
    let source = serde_json::to_string(chart_js).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        if (!window.__forecastChartsRequested) {{
            window.__forecastChartsRequested = true;
            window.__forecastChartScripts = {source};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__forecastChartScripts);
                    delete window.__forecastChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    window.__forecastChartsReady = true;
                    console.log('Forecast charts initialized');
                }}
            }}, 100);
        }}
        "#
    )
}

/// JS expression that increments and yields the render generation of the
/// container whose id is the JS string literal `id`.
fn next_generation(id: &str) -> String {
    format!(
        "(window.__forecastChartGen = window.__forecastChartGen || {{}}, \
         window.__forecastChartGen[{id}] = (window.__forecastChartGen[{id}] || 0) + 1)"
    )
}

/// Render `series` as a line chart into the element with id `container_id`.
///
/// Polls until D3, the chart script and the container element all exist.
/// A later render or destroy of the same container cancels a pending poll.
pub fn render_line_chart(container_id: &str, series: &ChartSeries, config: &ChartConfig) {
    match render_script(container_id, series, config) {
        Ok(script) => call_js(&script),
        Err(e) => log::error!("Failed to serialize chart {}: {}", container_id, e),
    }
}

fn render_script(
    container_id: &str,
    series: &ChartSeries,
    config: &ChartConfig,
) -> Result<String, serde_json::Error> {
    // Each payload is a JSON document embedded as a JS string literal
    let data = serde_json::to_string(&serde_json::to_string(series)?)?;
    let config = serde_json::to_string(&serde_json::to_string(config)?)?;
    let id = serde_json::to_string(container_id)?;
    let generation = next_generation(&id);
    Ok(format!(
        r#"
        (function() {{
            var gen = {generation};
            var poll = setInterval(function() {{
                if (window.__forecastChartGen[{id}] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__forecastChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Forecast] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    ))
}

/// Clear the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    match serde_json::to_string(container_id) {
        Ok(id) => call_js(&destroy_script(&id)),
        Err(e) => log::error!("Failed to serialize chart id {}: {}", container_id, e),
    }
}

fn destroy_script(id: &str) -> String {
    let generation = next_generation(id);
    format!("{generation}; var el = document.getElementById({id}); if (el) el.innerHTML = '';")
}

/// Blocking browser notification (`window.alert`).
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window to show notification: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("window.alert failed: {:?}", e);
    }
}
