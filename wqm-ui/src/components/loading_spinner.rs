//! Spinning droplet shown while the fixtures load.

use dioxus::prelude::*;

const SPIN_KEYFRAMES: &str = "@keyframes wqm-spin { to { transform: rotate(360deg); } }";

#[component]
pub fn LoadingSpinner(
    #[props(default = "Đang tải dữ liệu chất lượng nước...".to_string())] label: String,
) -> Element {
    rsx! {
        style { "{SPIN_KEYFRAMES}" }
        div {
            role: "status",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 64px 0;",
            div {
                style: "width: 48px; height: 48px; border-radius: 50%; border: 4px solid rgba(103,232,249,0.2); border-top-color: #67e8f9; animation: wqm-spin 0.9s linear infinite;",
            }
            span { style: "font-size: 15px; color: rgba(255,255,255,0.8);", "💧 {label}" }
        }
    }
}
