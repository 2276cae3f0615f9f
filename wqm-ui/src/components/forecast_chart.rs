//! 7-day forecast line chart (D3.js).

use crate::components::ChartHeader;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use serde_json::json;

const CHART_CONTAINER_ID: &str = "wqm-forecast-chart";
const CHART_HEIGHT: u32 = 360;

/// Text laid over the chart area while there is nothing to draw.
fn overlay_text(loading: bool, days: usize) -> Option<&'static str> {
    if loading {
        Some("Đang tải biểu đồ...")
    } else if days == 0 {
        Some("Chưa có dữ liệu dự báo")
    } else {
        None
    }
}

#[component]
pub fn ForecastChart() -> Element {
    let state = use_context::<AppState>();

    // Render once the forecast is loaded; re-render if it changes.
    use_effect(move || {
        let forecast = state.forecast.read().clone();
        if (state.loading)() || forecast.is_empty() {
            return;
        }
        js_bridge::init_charts();
        let data_json = js_bridge::forecast_chart_json(&forecast);
        let config_json = json!({
            "height": CHART_HEIGHT,
            "yLabel": "TDS (mg/L) · pH ×10 · Độ đục ×10",
        })
        .to_string();
        js_bridge::render_forecast_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    let overlay = overlay_text((state.loading)(), state.forecast.read().len());

    rsx! {
        div {
            style: "padding: 24px; border-radius: 16px; background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.12);",
            ChartHeader {
                title: "📈 Dự Báo Chất Lượng Nước 7 Ngày".to_string(),
                subtitle: "pH và độ đục được nhân 10 để hiển thị cùng thang đo với TDS".to_string(),
                live: true,
            }
            div {
                style: "position: relative; width: 100%; min-height: {CHART_HEIGHT}px;",
                if let Some(text) = overlay {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #94a3b8; font-size: 14px;",
                        "{text}"
                    }
                }
                div { id: CHART_CONTAINER_ID, style: "width: 100%;" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_only_without_data() {
        assert_eq!(overlay_text(true, 7), Some("Đang tải biểu đồ..."));
        assert_eq!(overlay_text(false, 0), Some("Chưa có dữ liệu dự báo"));
        assert_eq!(overlay_text(false, 7), None);
    }
}
