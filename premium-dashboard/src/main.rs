//! SafeDrop premium dashboard
//!
//! 7-day forecast chart (D3.js), hand-entered device readings, the sortable
//! region table and the floating AquaBot assistant.
//!
//! D3 is loaded from a CDN; `js_bridge::init_charts` polls until it is ready.

use dioxus::prelude::*;
use wqm_assistant::session::PanelStyle;
use wqm_ui::components::{
    ChatPanel, DeviceInput, ErrorDisplay, ForecastChart, LoadingSpinner, RegionTable,
};
use wqm_ui::config;
use wqm_ui::state::AppState;

const REGIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/regions.csv"));
const FORECAST_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/forecast.csv"));

const D3_CDN: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting premium-dashboard for {}", wqm_ui::config::site_name());
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("safedrop-premium-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        state.load_fixtures(REGIONS_CSV, FORECAST_CSV);
    });

    rsx! {
        document::Script { src: D3_CDN }
        div {
            style: "min-height: 100vh; padding: 24px 16px; color: #fff; font-family: system-ui, -apple-system, sans-serif; background: linear-gradient(135deg, #0f172a 0%, #312e81 50%, #0e7490 100%);",
            div {
                style: "max-width: 1200px; margin: 0 auto; display: flex; flex-direction: column; gap: 32px;",

                PremiumHeader {}

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay {
                        message: err.clone(),
                        on_dismiss: move |_| state.error_msg.set(None),
                    }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    ForecastChart {}
                    DeviceInput {}
                    RegionTable {}
                }
            }
            ChatPanel { style: PanelStyle::Compact }
        }
    }
}

#[component]
fn PremiumHeader() -> Element {
    let features = [
        "7-Day Forecasting",
        "AI Chat Assistant",
        "Device Integration",
        "Advanced Analytics",
    ];
    rsx! {
        header {
            style: "text-align: center;",
            div {
                style: "display: inline-block; margin-bottom: 12px; padding: 4px 14px; border-radius: 999px; font-size: 13px; font-weight: 700; color: #1e1b4b; background: linear-gradient(90deg, #facc15, #f59e0b);",
                "⚡ Premium Dashboard"
            }
            h1 {
                style: "margin: 0 0 12px 0; font-size: 38px; font-weight: 900; color: #e0f2fe;",
                "{config::site_name()} Premium"
            }
            div {
                style: "display: flex; justify-content: center; gap: 20px; flex-wrap: wrap; font-size: 14px; color: rgba(255,255,255,0.85);",
                for feature in features {
                    span { key: "{feature}", "✓ {feature}" }
                }
            }
        }
    }
}
