//! Legend of the five quality tiers.

use dioxus::prelude::*;
use wqm_core::quality::QualityLevel;

#[component]
pub fn QualityLegend() -> Element {
    rsx! {
        div {
            style: "background: rgba(15,23,42,0.75); border: 1px solid rgba(255,255,255,0.2); border-radius: 12px; padding: 12px 16px;",
            h4 {
                style: "margin: 0 0 8px 0; font-size: 13px; font-weight: 700; color: #fff;",
                "🌊 Mức Chất Lượng Nước"
            }
            for level in QualityLevel::ALL {
                div {
                    key: "{level.key()}",
                    style: "display: flex; align-items: center; gap: 10px; margin: 4px 0;",
                    span {
                        style: "width: 12px; height: 12px; border-radius: 50%; border: 1px solid rgba(255,255,255,0.3); background: {level.color()};",
                    }
                    span {
                        style: "font-size: 12px; color: rgba(255,255,255,0.9);",
                        "{level.label()}"
                    }
                }
            }
        }
    }
}
