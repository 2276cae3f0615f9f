//! Typed wrappers around JS interop.
//!
//! The D3.js forecast chart lives in `assets/js/forecast-chart.js`; it is
//! evaluated as a global once D3 is ready and called through `js_sys::eval()`.
//! The heatmap raster is blitted straight into a `<canvas>` via `web-sys`.

use serde_json::json;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};
use wqm_core::forecast::{chart_series, ForecastPoint};

static FORECAST_CHART_JS: &str = include_str!("../assets/js/forecast-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SafeDrop JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The script is stashed on `window` and evaluated at global scope by an
/// indirect `eval` once `d3` exists, then its entry points are promoted to
/// `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__wqmChartScripts = {};",
        serde_json::to_string(FORECAST_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__wqmChartsReady) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__wqmChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wqmChartScripts);
                    delete window.__wqmChartScripts;
                    if (typeof renderForecastChart !== 'undefined') window.renderForecastChart = renderForecastChart;
                    if (typeof destroyForecastChart !== 'undefined') window.destroyForecastChart = destroyForecastChart;
                    window.__wqmChartsReady = true;
                    console.log('SafeDrop charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Quote a JSON payload as a single-quoted JS string literal body.
fn escape_js_arg(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Chart payload: day labels plus one series per parameter.
pub fn forecast_chart_json(points: &[ForecastPoint]) -> String {
    let days: Vec<&str> = points.iter().map(|p| p.day.as_str()).collect();
    json!({
        "days": days,
        "series": chart_series(points),
    })
    .to_string()
}

/// Render the forecast line chart once D3, the script and the container exist.
pub fn render_forecast_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_arg(data_json);
    let escaped_config = escape_js_arg(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wqmChartsReady &&
                    typeof window.renderForecastChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderForecastChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[SafeDrop] renderForecastChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyForecastChart) window.destroyForecastChart('{0}'); \
         else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }}",
        container_id
    ));
}

/// Keep the newest chat message in view.
pub fn scroll_to_bottom(element_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.scrollTop = el.scrollHeight;",
        element_id
    ));
}

/// Copy an RGBA buffer into the canvas with the given id.
///
/// The canvas is resized to `width × height`; CSS scales it to the container.
pub fn paint_canvas(canvas_id: &str, width: u32, height: u32, pixels: &[u8]) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas not mounted"))?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(pixels), width, height)?;
    ctx.put_image_data(&image, 0.0, 0.0)
}
