//! Sortable table of regions with per-parameter status and a summary row.

use crate::state::AppState;
use dioxus::prelude::*;
use wqm_core::quality::{ph_status, tds_status, turbidity_status, ParameterStatus};
use wqm_core::region::Region;
use wqm_core::stats::RegionSummary;
use wqm_core::table::{sort_regions, SortField};

#[component]
pub fn RegionTable() -> Element {
    let mut state = use_context::<AppState>();
    let sort = (state.sort_state)();
    let regions = state.regions.read().clone();

    let Some(summary) = RegionSummary::from_regions(&regions) else {
        return rsx! { EmptyTable {} };
    };
    let sorted = sort_regions(&regions, sort);

    rsx! {
        div {
            style: "padding: 24px; border-radius: 16px; background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.12);",
            div {
                style: "text-align: center; margin-bottom: 16px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 20px; font-weight: 700; color: #e0f2fe;",
                    "📊 Chất Lượng Nước Theo Vùng"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: rgba(255,255,255,0.75);",
                    "Dữ liệu toàn diện về chất lượng nước tại {regions.len()} thành phố lớn của Việt Nam"
                }
            }

            div {
                style: "overflow-x: auto;",
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px; color: #f1f5f9;",
                    thead {
                        tr {
                            for field in SortField::ALL {
                                th {
                                    key: "{field.header()}",
                                    style: "padding: 12px 16px; text-align: left; cursor: pointer; user-select: none; border-bottom: 1px solid rgba(255,255,255,0.15);",
                                    onclick: move |_| {
                                        let next = (state.sort_state)().clicked(field);
                                        state.sort_state.set(next);
                                    },
                                    "{field.header()} "
                                    span { style: "opacity: 0.7;", "{sort.indicator(field)}" }
                                }
                            }
                            th {
                                style: "padding: 12px 16px; text-align: left; border-bottom: 1px solid rgba(255,255,255,0.15);",
                                "🏷️ Chất Lượng"
                            }
                        }
                    }
                    tbody {
                        for region in sorted {
                            RegionRow { key: "{region.id}", region }
                        }
                    }
                }
            }

            SummaryStats { summary }
        }
    }
}

#[component]
fn RegionRow(region: Region) -> Element {
    let color = region.level.color();
    rsx! {
        tr {
            style: "border-bottom: 1px solid rgba(255,255,255,0.08);",
            td {
                style: "padding: 12px 16px;",
                span { style: "display: inline-block; width: 10px; height: 10px; margin-right: 8px; border-radius: 50%; background: {color};" }
                strong { "{region.name}" }
            }
            MeasureCell { value: format!("{} mg/L", region.tds), status: tds_status(region.tds) }
            MeasureCell { value: format!("{}", region.ph), status: ph_status(region.ph) }
            MeasureCell { value: format!("{} NTU", region.turbidity), status: turbidity_status(region.turbidity) }
            td {
                style: "padding: 12px 16px;",
                span {
                    style: "padding: 4px 10px; border-radius: 999px; font-size: 12px; font-weight: 700; color: #fff; background: {color};",
                    "{region.level.label()}"
                }
            }
        }
    }
}

#[component]
fn MeasureCell(value: String, status: ParameterStatus) -> Element {
    rsx! {
        td {
            style: "padding: 12px 16px;",
            div { style: "font-weight: 600;", "{value}" }
            div { style: "font-size: 12px; color: {status.tone.color()};", "{status.label}" }
        }
    }
}

#[component]
fn SummaryStats(summary: RegionSummary) -> Element {
    let cells = [
        (summary.stations.to_string(), "Trạm đo"),
        (summary.avg_tds.to_string(), "TDS TB (mg/L)"),
        (summary.avg_ph_display(), "pH TB"),
        (summary.avg_turbidity_display(), "Độ đục TB (NTU)"),
    ];
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); gap: 16px; margin-top: 20px;",
            for (value, label) in cells {
                div {
                    key: "{label}",
                    style: "text-align: center; padding: 16px; border-radius: 12px; background: rgba(59,130,246,0.1);",
                    div { style: "font-size: 24px; font-weight: 800; color: #e0f2fe;", "{value}" }
                    div { style: "font-size: 12px; color: rgba(255,255,255,0.7);", "{label}" }
                }
            }
        }
    }
}

#[component]
fn EmptyTable() -> Element {
    rsx! {
        div {
            style: "padding: 48px 24px; text-align: center; border-radius: 16px; background: rgba(255,255,255,0.06);",
            div { style: "font-size: 40px; margin-bottom: 12px;", "📭" }
            h4 { style: "margin: 0 0 6px 0; color: #e0f2fe;", "Không có dữ liệu" }
            p {
                style: "margin: 0; font-size: 13px; color: rgba(255,255,255,0.7);",
                "Chưa có dữ liệu chất lượng nước cho các vùng. Vui lòng thử lại sau."
            }
        }
    }
}
