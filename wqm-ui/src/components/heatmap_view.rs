//! Interactive water quality heatmap.
//!
//! The heat layer is rasterised in Rust by `wqm_heatmap::HeatField` and
//! blitted into a canvas. Region hotspots sit on top as absolutely
//! positioned dots; hovering one shows a detail tooltip that follows the
//! pointer.

use crate::config::{clock_label, HEATMAP_RASTER_HEIGHT, HEATMAP_RASTER_WIDTH};
use crate::js_bridge;
use crate::state::AppState;
use crate::components::QualityLegend;
use chrono::Local;
use dioxus::prelude::*;
use wqm_core::region::Region;
use wqm_core::stats::level_counts;
use wqm_heatmap::layout::hotspots;
use wqm_heatmap::HeatField;

const CANVAS_ID: &str = "wqm-heatmap-canvas";

/// Width of the tooltip box; used to flip it left near the right edge.
const TOOLTIP_WIDTH: f64 = 300.0;

#[component]
pub fn HeatmapView() -> Element {
    let mut state = use_context::<AppState>();
    let mut pointer = use_signal(|| (0.0_f64, 0.0_f64));

    // Repaint the heat layer whenever the regions change.
    use_effect(move || {
        let regions = state.regions.read().clone();
        if regions.is_empty() {
            return;
        }
        let pixels = HeatField::from_regions(&regions).render(HEATMAP_RASTER_WIDTH, HEATMAP_RASTER_HEIGHT);
        if let Err(e) = js_bridge::paint_canvas(
            CANVAS_ID,
            HEATMAP_RASTER_WIDTH,
            HEATMAP_RASTER_HEIGHT,
            &pixels,
        ) {
            log::warn!("Heatmap paint failed: {:?}", e);
        }
    });

    let regions = state.regions.read().clone();
    let counts = level_counts(&regions);
    let hovered = state.hovered();
    let hovered_id = hovered.as_ref().map(|r| r.id);
    let spots: Vec<(Region, String, String)> = hotspots(&regions)
        .into_iter()
        .map(|spot| {
            let position = format!(
                "position: absolute; left: {:.3}%; top: {:.3}%; width: 24px; height: 24px; transform: translate(-12px, -12px); cursor: pointer;",
                spot.left_percent(),
                spot.top_percent()
            );
            let ring = if hovered_id == Some(spot.region.id) {
                "transform: scale(1.25); box-shadow: 0 0 0 4px rgba(255,255,255,0.3);"
            } else {
                "box-shadow: 0 4px 12px rgba(0,0,0,0.4);"
            };
            let dot = format!(
                "width: 100%; height: 100%; border-radius: 50%; border: 2px solid rgba(255,255,255,0.7); background: {}; {}",
                spot.region.level.color(),
                ring
            );
            (spot.region.clone(), position, dot)
        })
        .collect();
    let (px, py) = pointer();

    rsx! {
        div {
            style: "width: 100%;",

            div {
                style: "margin-bottom: 24px; text-align: center;",
                h2 {
                    style: "margin: 0 0 8px 0; font-size: 32px; font-weight: 800; color: #e0f2fe;",
                    "💧 Bản Đồ Chất Lượng Nước"
                }
                p {
                    style: "margin: 0; font-size: 16px; color: rgba(255,255,255,0.8);",
                    "Giám sát môi trường thời gian thực với phân tích thông minh"
                }
                div {
                    style: "display: flex; justify-content: center; gap: 16px; margin-top: 12px; font-size: 13px; color: #bfdbfe;",
                    span { "🟢 {regions.len()} Trạm Hoạt Động" }
                    span { "🔵 Cập Nhật Liên Tục" }
                    span { "🟣 AI Phân Tích" }
                }
            }

            // Map area
            div {
                style: "position: relative; width: 100%; aspect-ratio: 3 / 2; border-radius: 16px; overflow: hidden; background: radial-gradient(ellipse at center, #1e3a8a 0%, #0f172a 75%); box-shadow: 0 20px 40px rgba(0,0,0,0.4);",
                canvas {
                    id: CANVAS_ID,
                    style: "position: absolute; inset: 0; width: 100%; height: 100%;",
                }

                div {
                    style: "position: absolute; inset: 0;",
                    onmousemove: move |evt: MouseEvent| {
                        let p = evt.client_coordinates();
                        pointer.set((p.x, p.y));
                    },
                    for (region, position, dot) in spots {
                        div {
                            key: "{region.id}",
                            style: "{position}",
                            onmouseenter: move |_| state.hovered_region.set(Some(region.id)),
                            onmouseleave: move |_| state.hovered_region.set(None),
                            div { style: "{dot}" }
                            if hovered_id == Some(region.id) {
                                div {
                                    style: "position: absolute; top: 32px; left: 50%; transform: translateX(-50%); white-space: nowrap; font-size: 12px; padding: 2px 8px; border-radius: 8px; background: rgba(0,0,0,0.8); color: #fff;",
                                    "{region.name}"
                                }
                            }
                        }
                    }
                }

                if hovered.is_none() {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none;",
                        div {
                            style: "font-size: 14px; color: rgba(255,255,255,0.9); background: rgba(0,0,0,0.3); border: 1px solid rgba(255,255,255,0.2); border-radius: 12px; padding: 10px 20px;",
                            "👆 Di chuột qua các vùng để xem chi tiết"
                        }
                    }
                }

                div {
                    style: "position: absolute; right: 16px; bottom: 16px;",
                    QualityLegend {}
                }
            }

            // Per-tier counts
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 16px; margin-top: 24px;",
                for (level, count) in counts {
                    div {
                        key: "{level.key()}",
                        style: "text-align: center; padding: 20px; border-radius: 16px; background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.1);",
                        div {
                            style: "width: 24px; height: 24px; margin: 0 auto 12px auto; border-radius: 50%; background: {level.color()};",
                        }
                        div { style: "font-size: 28px; font-weight: 800; color: #e0f2fe;", "{count}" }
                        div { style: "font-size: 13px; color: rgba(255,255,255,0.9);", "{level.label()}" }
                        div { style: "font-size: 11px; color: rgba(255,255,255,0.6);", "vùng" }
                    }
                }
            }

            if let Some(region) = hovered {
                RegionTooltip { region, x: px, y: py }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RegionTooltipProps {
    region: Region,
    x: f64,
    y: f64,
}

#[component]
fn RegionTooltip(props: RegionTooltipProps) -> Element {
    let region = &props.region;
    let color = region.level.color();
    let viewport_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX);
    let flip = if props.x > viewport_width - TOOLTIP_WIDTH {
        "transform: translateX(-100%) translateX(-30px);"
    } else {
        ""
    };
    let left = props.x + 15.0;
    let top = props.y - 140.0;
    let updated = clock_label(&Local::now());

    rsx! {
        div {
            style: "position: fixed; left: {left}px; top: {top}px; z-index: 50; pointer-events: none; {flip}",
            div {
                style: "min-width: 280px; padding: 20px; border-radius: 16px; background: rgba(255,255,255,0.95); color: #111827; box-shadow: 0 20px 40px rgba(0,0,0,0.3);",
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                    span { style: "width: 20px; height: 20px; border-radius: 50%; border: 2px solid #fff; background: {color};" }
                    h3 { style: "margin: 0; font-size: 18px; font-weight: 700;", "{region.name}" }
                }
                TooltipRow { label: "🏷️ Chất lượng:", value: region.level.label().to_string(), color: color.to_string() }
                TooltipRow { label: "🔬 TDS:", value: format!("{} mg/L", region.tds), color: "#2563eb".to_string() }
                TooltipRow { label: "⚗️ pH:", value: format!("{}", region.ph), color: "#16a34a".to_string() }
                TooltipRow { label: "💧 Độ đục:", value: format!("{} NTU", region.turbidity), color: "#9333ea".to_string() }
                div {
                    style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e5e7eb; font-size: 12px; color: #6b7280; text-align: center;",
                    "📊 Cập nhật lúc {updated}"
                }
            }
        }
    }
}

#[component]
fn TooltipRow(label: &'static str, value: String, color: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 6px 0; font-size: 14px;",
            span { style: "color: #4b5563;", "{label}" }
            span { style: "font-family: monospace; font-weight: 700; color: {color};", "{value}" }
        }
    }
}
