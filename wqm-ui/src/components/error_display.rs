//! Banner for fixture load failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: flex-start; gap: 12px; margin: 16px 0; padding: 16px 20px; border-radius: 16px; color: #fee2e2; background: rgba(239,68,68,0.15); border: 1px solid rgba(248,113,113,0.45);",
            span { style: "font-size: 22px; line-height: 1;", "⚠️" }
            div {
                style: "flex: 1;",
                div { style: "font-weight: 700; margin-bottom: 4px;", "Không thể tải dữ liệu" }
                div { style: "font-size: 13px; color: #fecaca; word-break: break-word;", "{props.message}" }
            }
            if let Some(handler) = props.on_dismiss {
                button {
                    title: "Đóng",
                    style: "border: none; background: transparent; color: #fecaca; font-size: 18px; cursor: pointer;",
                    onclick: move |evt| handler.call(evt),
                    "✕"
                }
            }
        }
    }
}
