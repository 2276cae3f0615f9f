//! Section header with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Adds the green "live" dot after the title.
    #[props(default = false)]
    pub live: bool,
}

/// Header for dashboard sections.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px; text-align: center;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 20px; font-weight: 700; color: #e0f2fe;",
                "{props.title}"
                if props.live {
                    span {
                        style: "display: inline-block; width: 8px; height: 8px; margin-left: 8px; border-radius: 50%; background: #4ade80; vertical-align: middle;",
                    }
                }
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: rgba(255,255,255,0.75);",
                    "{props.subtitle}"
                }
            }
        }
    }
}
