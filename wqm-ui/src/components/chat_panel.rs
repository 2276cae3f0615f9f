//! AquaBot chat panel.
//!
//! Two variants share one session model:
//! - `Compact`: floating toggle button with an unread badge; posts auto
//!   insights while open and auto-analysis is on.
//! - `Fullscreen`: always-open panel embedded in the home page.
//!
//! Replies come from a [`Responder`] after the session's typing delay.

use crate::config::{clock_label, local, INSIGHT_IDLE_POLL_MS};
use crate::js_bridge;
use chrono::Utc;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wqm_assistant::responder::{KeywordResponder, Responder};
use wqm_assistant::session::{ChatSession, Origin, PanelStyle, QUICK_ACTION_DISPATCH_MS};
use wqm_core::chat::ChatMessage;

#[derive(Props, Clone, PartialEq)]
pub struct ChatPanelProps {
    pub style: PanelStyle,
}

fn messages_id(style: PanelStyle) -> &'static str {
    match style {
        PanelStyle::Compact => "wqm-chat-compact-messages",
        PanelStyle::Fullscreen => "wqm-chat-full-messages",
    }
}

/// Unread badge text; hidden at zero, capped at `9+`.
fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Changes whenever the visible transcript grows or the panel opens.
fn scroll_marker(session: &ChatSession) -> (usize, bool, bool) {
    (session.messages().len(), session.is_typing(), session.is_open())
}

fn millis(delay: chrono::Duration) -> u32 {
    delay.num_milliseconds().clamp(0, u32::MAX as i64) as u32
}

#[component]
pub fn ChatPanel(props: ChatPanelProps) -> Element {
    let style = props.style;
    let mut session = use_signal(move || ChatSession::new(style, Utc::now()));
    let mut rng = use_signal(StdRng::from_entropy);
    let mut responder = use_signal(|| KeywordResponder::new(StdRng::from_entropy()));

    let mut send = move |text: String, origin: Origin| {
        let Some(prompt) = session.write().submit(&text, Utc::now()) else {
            return;
        };
        let delay = session.read().typing_delay(origin, &mut *rng.write());
        spawn(async move {
            TimeoutFuture::new(millis(delay)).await;
            let reply = responder.write().respond(&prompt);
            log::debug!("AquaBot replied with {:?}", reply.topic);
            session.write().deliver(reply.text, Utc::now());
        });
    };

    let mut quick = move |prompt: &'static str| {
        session.write().set_draft(prompt);
        spawn(async move {
            TimeoutFuture::new(QUICK_ACTION_DISPATCH_MS).await;
            send(prompt.to_string(), Origin::QuickAction);
        });
    };

    // Scroll after the new message is in the DOM; typing into the draft
    // does not move the marker.
    let marker = use_memo(move || scroll_marker(&session.read()));
    use_effect(move || {
        marker();
        js_bridge::scroll_to_bottom(messages_id(style));
    });

    // Auto-insight loop; dropped with the component.
    use_future(move || async move {
        loop {
            if !session.read().auto_insights_active() {
                TimeoutFuture::new(INSIGHT_IDLE_POLL_MS).await;
                continue;
            }
            let wait = session.read().auto_insights().next_interval(&mut *rng.write());
            TimeoutFuture::new(millis(wait)).await;
            session.write().tick_insights(&mut *rng.write(), Utc::now());
        }
    });

    let snapshot = session.read().clone();
    let placeholder = match style {
        PanelStyle::Compact => "Nhập tin nhắn...",
        PanelStyle::Fullscreen => "Hỏi AquaBot về chất lượng nước...",
    };
    let can_send = snapshot.can_send(snapshot.draft());
    let draft = snapshot.draft().to_string();

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            let text = session.read().draft().to_string();
            send(text, Origin::Typed);
        }
    };

    let body = rsx! {
        div {
            id: messages_id(style),
            style: "flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px; background: #f8fafc;",
            for (i, message) in snapshot.messages().iter().cloned().enumerate() {
                MessageBubble { key: "{i}", message }
            }
            if snapshot.is_typing() {
                div {
                    style: "align-self: flex-start; padding: 10px 14px; border-radius: 16px; background: #e0f2fe; color: #0369a1; font-size: 13px;",
                    "AquaBot đang soạn tin..."
                }
            }
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; padding: 8px 16px; background: #fff; border-top: 1px solid #e2e8f0;",
            for action in style.quick_actions().iter().copied() {
                button {
                    key: "{action.label}",
                    disabled: snapshot.is_typing(),
                    style: "padding: 6px 12px; border-radius: 999px; border: 1px solid #bae6fd; background: #f0f9ff; color: #0369a1; font-size: 12px; cursor: pointer;",
                    onclick: move |_| quick(action.prompt),
                    "{action.label}"
                }
            }
        }
        div {
            style: "display: flex; gap: 8px; padding: 12px 16px; background: #fff; border-radius: 0 0 16px 16px;",
            input {
                r#type: "text",
                value: "{draft}",
                placeholder,
                disabled: snapshot.is_typing(),
                style: "flex: 1; padding: 10px 14px; border-radius: 12px; border: 1px solid #cbd5e1; font-size: 14px; color: #0f172a;",
                oninput: move |evt: Event<FormData>| session.write().set_draft(evt.value()),
                onkeydown: on_keydown,
            }
            button {
                disabled: !can_send,
                style: "padding: 10px 16px; border: none; border-radius: 12px; color: #fff; background: linear-gradient(90deg, #3b82f6, #06b6d4); cursor: pointer;",
                onclick: move |_| {
                    let text = session.read().draft().to_string();
                    send(text, Origin::Typed);
                },
                "➤"
            }
        }
    };

    match style {
        PanelStyle::Fullscreen => rsx! {
            div {
                style: "width: 100%; height: 700px; display: flex; flex-direction: column; border-radius: 16px; background: rgba(255,255,255,0.95); box-shadow: 0 20px 40px rgba(0,0,0,0.35);",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 20px 24px; border-radius: 16px 16px 0 0; color: #fff; background: linear-gradient(90deg, #3b82f6, #06b6d4);",
                    div {
                        h3 { style: "margin: 0; font-size: 22px; font-weight: 700;", "💧 AquaBot - AI Water Assistant" }
                        p { style: "margin: 4px 0 0 0; font-size: 14px; color: #dbeafe;", "🤖 Trợ lý AI thông minh - Phân tích thời gian thực 24/7" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 16px;",
                        if let Some(badge) = badge_label(snapshot.notifications()) {
                            button {
                                title: "Đánh dấu đã đọc",
                                style: "padding: 4px 10px; border: none; border-radius: 999px; background: #ef4444; color: #fff; font-size: 12px; font-weight: 700; cursor: pointer;",
                                onclick: move |_| session.write().clear_notifications(),
                                "🔔 {badge}"
                            }
                        }
                        AutoToggle { on: snapshot.auto_analysis(), onclick: move |_| session.write().toggle_auto_analysis() }
                    }
                }
                {body}
            }
        },
        PanelStyle::Compact => rsx! {
            div {
                style: "position: fixed; right: 24px; bottom: 24px; z-index: 40;",
                if snapshot.is_open() {
                    div {
                        style: "width: 360px; height: 520px; margin-bottom: 12px; display: flex; flex-direction: column; border-radius: 16px; background: #fff; box-shadow: 0 20px 40px rgba(0,0,0,0.35);",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-radius: 16px 16px 0 0; color: #fff; background: linear-gradient(90deg, #3b82f6, #06b6d4);",
                            div {
                                h3 { style: "margin: 0; font-size: 14px; font-weight: 700;", "AquaBot - Trợ Lý Thông Minh" }
                                p {
                                    style: "margin: 2px 0 0 0; font-size: 11px; color: #dbeafe;",
                                    if snapshot.auto_analysis() { "🤖 Đang phân tích tự động..." } else { "💬 Sẵn sàng trò chuyện" }
                                }
                            }
                            AutoToggle { on: snapshot.auto_analysis(), onclick: move |_| session.write().toggle_auto_analysis() }
                        }
                        {body}
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        style: "position: relative; width: 60px; height: 60px; border: none; border-radius: 50%; font-size: 26px; color: #fff; background: linear-gradient(135deg, #3b82f6, #06b6d4); box-shadow: 0 10px 25px rgba(0,0,0,0.3); cursor: pointer;",
                        onclick: move |_| {
                            let mut s = session.write();
                            if !s.is_open() {
                                s.clear_notifications();
                            }
                            s.toggle_open();
                        },
                        if snapshot.is_open() { "✕" } else { "💧" }
                        if let Some(badge) = badge_label(snapshot.notifications()) {
                            span {
                                style: "position: absolute; top: -4px; right: -4px; min-width: 20px; height: 20px; padding: 0 4px; border-radius: 999px; background: #ef4444; color: #fff; font-size: 11px; font-weight: 700; line-height: 20px;",
                                "{badge}"
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn AutoToggle(on: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (label, background, title) = if on {
        ("🔄 TỰ ĐỘNG", "#22c55e", "Tắt phân tích tự động")
    } else {
        ("⏸️ THỦ CÔNG", "rgba(255,255,255,0.2)", "Bật phân tích tự động")
    };
    rsx! {
        button {
            title,
            style: "padding: 6px 12px; border: none; border-radius: 10px; font-size: 12px; font-weight: 600; color: #fff; background: {background}; cursor: pointer;",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let at = clock_label(&local(&message.timestamp));
    let (align, background, color) = if message.is_user() {
        ("flex-end", "linear-gradient(90deg, #3b82f6, #06b6d4)", "#fff")
    } else {
        ("flex-start", "#fff", "#0f172a")
    };
    rsx! {
        div {
            style: "align-self: {align}; max-width: 80%;",
            div {
                style: "padding: 10px 14px; border-radius: 16px; white-space: pre-wrap; font-size: 14px; line-height: 1.45; color: {color}; background: {background}; border: 1px solid #e2e8f0;",
                "{message.text}"
            }
            div {
                style: "margin-top: 2px; font-size: 10px; color: #94a3b8; text-align: {align};",
                "{at}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hides_zero_and_caps_at_nine() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(9).as_deref(), Some("9"));
        assert_eq!(badge_label(12).as_deref(), Some("9+"));
    }

    #[test]
    fn scroll_marker_tracks_transcript_not_draft() {
        let now = Utc::now();
        let mut session = ChatSession::new(PanelStyle::Compact, now);
        let closed = scroll_marker(&session);
        session.toggle_open();
        let opened = scroll_marker(&session);
        assert_ne!(closed, opened);

        session.set_draft("đang gõ");
        assert_eq!(scroll_marker(&session), opened);

        session.submit("tds", now).unwrap();
        let pending = scroll_marker(&session);
        assert_ne!(pending, opened);
        session.deliver("reply", now);
        assert_ne!(scroll_marker(&session), pending);
    }

    #[test]
    fn negative_delays_clamp_to_zero() {
        assert_eq!(millis(chrono::Duration::milliseconds(-5)), 0);
        assert_eq!(millis(chrono::Duration::milliseconds(1200)), 1200);
    }
}
