//! TDS entry form and the grid of recent device readings.

use crate::config::{clock_label, date_label, local, SAVE_DELAY_MS, SUCCESS_BADGE_MS};
use crate::state::AppState;
use chrono::Utc;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wqm_core::quality::QualityLevel;
use wqm_core::reading::{validate_input, DeviceReading, InputValidation, RECENT_DISPLAY};

#[component]
pub fn DeviceInput() -> Element {
    let mut state = use_context::<AppState>();
    let mut tds_value = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut show_badge = use_signal(|| false);

    let validation = validate_input(&tds_value());
    let can_submit = validation.can_submit() && !saving();

    let (recent, total) = match state.readings.read().as_ref() {
        Some(log) => (
            log.latest(RECENT_DISPLAY).unwrap_or_default(),
            log.len().unwrap_or(0),
        ),
        None => (Vec::new(), 0),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = tds_value();
        if !validate_input(&input).can_submit() || saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            TimeoutFuture::new(SAVE_DELAY_MS).await;
            let result = match state.readings.write().as_mut() {
                Some(log) => Some(log.record(&input, Utc::now())),
                None => None,
            };
            saving.set(false);
            match result {
                Some(Ok(_)) => {
                    tds_value.set(String::new());
                    show_badge.set(true);
                    TimeoutFuture::new(SUCCESS_BADGE_MS).await;
                    show_badge.set(false);
                }
                Some(Err(e)) => {
                    log::warn!("TDS reading rejected: {}", e);
                }
                None => {
                    state.error_msg.set(Some("Chưa sẵn sàng lưu dữ liệu".to_string()));
                }
            }
        });
    };

    let border = match validation {
        InputValidation::Blank => "rgba(255,255,255,0.3)",
        InputValidation::Invalid(_) => "#f87171",
        InputValidation::Valid(_) => "#4ade80",
    };

    rsx! {
        div {
            style: "padding: 24px; border-radius: 16px; background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.12);",
            div {
                style: "text-align: center; margin-bottom: 24px;",
                h3 {
                    style: "margin: 0 0 6px 0; font-size: 20px; font-weight: 700; color: #e0f2fe;",
                    "📱 Nhập Dữ Liệu Từ Thiết Bị"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: rgba(255,255,255,0.8);",
                    "Nhập kết quả đo TDS từ thiết bị của bạn để theo dõi chất lượng nước"
                }
            }

            form {
                style: "max-width: 420px; margin: 0 auto 24px auto; text-align: center;",
                onsubmit: on_submit,
                label {
                    r#for: "tds",
                    style: "display: block; margin-bottom: 12px; font-size: 16px; font-weight: 600; color: rgba(255,255,255,0.9);",
                    "💧 Nhập chỉ số TDS bạn đo được"
                }
                div {
                    style: "position: relative;",
                    input {
                        id: "tds",
                        r#type: "number",
                        min: "0",
                        max: "1000",
                        step: "0.1",
                        placeholder: "Ví dụ: 150",
                        value: "{tds_value}",
                        disabled: saving(),
                        style: "width: 100%; box-sizing: border-box; padding: 14px; font-size: 18px; font-weight: 700; text-align: center; color: #fff; background: rgba(255,255,255,0.1); border: 2px solid {border}; border-radius: 16px;",
                        oninput: move |evt: Event<FormData>| tds_value.set(evt.value()),
                    }
                    span {
                        style: "position: absolute; right: 16px; top: 50%; transform: translateY(-50%); color: rgba(255,255,255,0.6);",
                        "mg/L"
                    }
                }
                ValidationMessage { validation }
                button {
                    r#type: "submit",
                    disabled: !can_submit,
                    style: "margin-top: 16px; min-width: 200px; padding: 14px 28px; font-size: 16px; font-weight: 700; color: #fff; border: none; border-radius: 16px; cursor: pointer; background: linear-gradient(90deg, #3b82f6, #06b6d4);",
                    if saving() { "⏳ Đang lưu..." } else { "💾 Lưu Dữ Liệu" }
                }
            }

            if show_badge() {
                div {
                    style: "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); z-index: 50; padding: 16px 32px; border-radius: 16px; font-size: 18px; font-weight: 700; color: #fff; background: linear-gradient(90deg, #22c55e, #10b981); box-shadow: 0 20px 40px rgba(0,0,0,0.35);",
                    "✅ Đã lưu thành công!"
                }
            }

            if recent.is_empty() {
                div {
                    style: "text-align: center; padding: 40px 0;",
                    div { style: "font-size: 40px; margin-bottom: 12px;", "📊" }
                    h4 { style: "margin: 0 0 6px 0; color: rgba(255,255,255,0.9);", "Chưa có dữ liệu" }
                    p {
                        style: "margin: 0; font-size: 13px; color: rgba(255,255,255,0.7);",
                        "Nhập kết quả đo TDS đầu tiên của bạn ở trên để bắt đầu theo dõi chất lượng nước."
                    }
                }
            } else {
                h4 {
                    style: "margin: 0 0 16px 0; text-align: center; font-size: 17px; color: #e0f2fe;",
                    "📊 Kết Quả Đo Gần Đây"
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px;",
                    for reading in recent {
                        ReadingCard { key: "{reading.id}", reading }
                    }
                }
                if total > RECENT_DISPLAY {
                    div {
                        style: "margin-top: 16px; text-align: center; font-size: 13px; color: #60a5fa;",
                        "Xem tất cả {total} kết quả →"
                    }
                }
            }

            TdsGuide {}
        }
    }
}

#[component]
fn ValidationMessage(validation: InputValidation) -> Element {
    let message = validation.message();
    if message.is_empty() {
        return rsx! {};
    }
    let (icon, color) = match validation {
        InputValidation::Invalid(_) => ("⚠️", "#f87171"),
        _ => ("✅", "#4ade80"),
    };
    rsx! {
        div {
            style: "margin-top: 8px; font-size: 13px; font-weight: 600; color: {color};",
            "{icon} {message}"
        }
    }
}

#[component]
fn ReadingCard(reading: DeviceReading) -> Element {
    let level = reading.level();
    let at = local(&reading.timestamp);
    rsx! {
        div {
            style: "padding: 16px; border-radius: 12px; background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);",
            div {
                style: "display: flex; align-items: baseline; gap: 6px; margin-bottom: 8px;",
                span { "{level.emoji()}" }
                span { style: "font-size: 18px; font-weight: 700; color: #fff;", "{reading.tds}" }
                span { style: "font-size: 12px; color: rgba(255,255,255,0.6);", "mg/L" }
            }
            div {
                style: "text-align: center;",
                span {
                    style: "padding: 3px 10px; border-radius: 999px; font-size: 12px; font-weight: 700; color: #fff; background: {level.color()};",
                    "{level.reading_label()}"
                }
            }
            div {
                style: "margin-top: 8px; text-align: center; font-size: 11px; color: rgba(255,255,255,0.5);",
                "📅 {date_label(&at)}"
                br {}
                "🕐 {clock_label(&at)}"
            }
        }
    }
}

#[component]
fn TdsGuide() -> Element {
    rsx! {
        div {
            style: "margin-top: 24px; padding: 16px; border-radius: 12px; background: rgba(59,130,246,0.1); border: 1px solid rgba(59,130,246,0.2);",
            h5 {
                style: "margin: 0 0 8px 0; font-size: 13px; font-weight: 700; color: #bfdbfe;",
                "💡 Hướng dẫn đọc chỉ số TDS"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 6px; font-size: 12px; color: rgba(255,255,255,0.8);",
                for level in QualityLevel::ALL {
                    span { key: "{level.key()}", "{level.emoji()} {tds_band(level)}: {level.reading_label()}" }
                }
            }
        }
    }
}

/// `<100 mg/L`, `100-150 mg/L`, ..., `>250 mg/L`.
fn tds_band(level: QualityLevel) -> String {
    let range = level.thresholds().tds;
    if range.min <= 0.0 {
        format!("<{} mg/L", range.max)
    } else if range.max.is_infinite() {
        format!(">{} mg/L", range.min)
    } else {
        format!("{}-{} mg/L", range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_bands_follow_thresholds() {
        assert_eq!(tds_band(QualityLevel::Excellent), "<100 mg/L");
        assert_eq!(tds_band(QualityLevel::Good), "100-150 mg/L");
        assert_eq!(tds_band(QualityLevel::Dangerous), ">250 mg/L");
    }
}
