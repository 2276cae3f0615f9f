//! SafeDrop home page
//!
//! Hero banner, the interactive water quality heatmap, the embedded
//! AquaBot assistant and a short guide to the measured parameters.
//!
//! Data flow:
//! 1. `build.rs` stages `regions.csv` and `forecast.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount: load both into the in-memory database and publish them to `AppState`.

use dioxus::prelude::*;
use wqm_assistant::session::PanelStyle;
use wqm_ui::components::{ChatPanel, ErrorDisplay, HeatmapView, LoadingSpinner, VideoEmbed};
use wqm_ui::config;
use wqm_ui::state::AppState;

const REGIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/regions.csv"));
const FORECAST_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/forecast.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting home-dashboard for {}", wqm_ui::config::site_name());
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("safedrop-home-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        state.load_fixtures(REGIONS_CSV, FORECAST_CSV);
    });

    rsx! {
        div {
            style: "min-height: 100vh; padding: 24px 16px; color: #fff; font-family: system-ui, -apple-system, sans-serif; background: linear-gradient(135deg, #0f172a 0%, #1e3a8a 50%, #0e7490 100%);",
            div {
                style: "max-width: 1200px; margin: 0 auto;",

                Hero {}

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay {
                        message: err.clone(),
                        on_dismiss: move |_| state.error_msg.set(None),
                    }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    section { style: "margin-top: 32px;", HeatmapView {} }
                }

                section {
                    style: "margin-top: 48px;",
                    h2 {
                        style: "margin: 0 0 16px 0; text-align: center; font-size: 28px; font-weight: 800; color: #e0f2fe;",
                        "🤖 Trò Chuyện Với AquaBot"
                    }
                    ChatPanel { style: PanelStyle::Fullscreen }
                }

                if let Some(video_id) = config::demo_video_id() {
                    section {
                        style: "margin-top: 48px;",
                        VideoEmbed { video_id: video_id.to_string() }
                    }
                }

                ParameterGuide {}
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    let state = use_context::<AppState>();
    let stations = state.regions.read().len();
    rsx! {
        header {
            style: "text-align: center; padding: 24px 0;",
            h1 {
                style: "margin: 0 0 8px 0; font-size: 44px; font-weight: 900; color: #e0f2fe;",
                "💧 {config::site_name()}"
            }
            p {
                style: "margin: 0 0 24px 0; font-size: 18px; color: rgba(255,255,255,0.8);",
                "Water quality monitoring for Vietnam's cities"
            }
            div {
                style: "display: flex; justify-content: center; gap: 40px; flex-wrap: wrap;",
                HeroStat { value: stations.to_string(), label: "Active Monitoring Stations" }
                HeroStat { value: "24/7".to_string(), label: "Real-time AI Analysis" }
                HeroStat { value: "98.7%".to_string(), label: "Data Accuracy Rate" }
            }
        }
    }
}

#[component]
fn HeroStat(value: String, label: &'static str) -> Element {
    rsx! {
        div {
            div { style: "font-size: 32px; font-weight: 800; color: #67e8f9;", "{value}" }
            div { style: "font-size: 13px; color: rgba(255,255,255,0.7);", "{label}" }
        }
    }
}

/// Reading guide for the three measured parameters.
#[component]
fn ParameterGuide() -> Element {
    let cards: [(&str, &str, [&str; 4]); 3] = [
        (
            "🔬",
            "TDS (Total Dissolved Solids)",
            [
                "Excellent: 0-100 mg/L",
                "Good: 100-150 mg/L",
                "Moderate: 150-200 mg/L",
                "Poor: 200+ mg/L",
            ],
        ),
        (
            "⚗️",
            "pH Level",
            [
                "Acidic: Below 6.5",
                "Neutral: 6.5-7.5",
                "Alkaline: 7.5-8.5",
                "Too alkaline: Above 8.5",
            ],
        ),
        (
            "💧",
            "Turbidity",
            [
                "Clear: 0-2 NTU",
                "Slightly cloudy: 2-5 NTU",
                "Cloudy: 5-10 NTU",
                "Very cloudy: 10+ NTU",
            ],
        ),
    ];
    rsx! {
        section {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px; margin-top: 48px;",
            for (icon, title, lines) in cards {
                div {
                    key: "{title}",
                    style: "padding: 24px; border-radius: 16px; background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.12);",
                    div { style: "font-size: 32px; margin-bottom: 8px;", "{icon}" }
                    h3 { style: "margin: 0 0 12px 0; font-size: 17px; color: #e0f2fe;", "{title}" }
                    for line in lines {
                        p { key: "{line}", style: "margin: 4px 0; font-size: 13px; color: rgba(255,255,255,0.8);", "{line}" }
                    }
                }
            }
        }
    }
}
