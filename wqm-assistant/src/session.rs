//! Chat panel state, independent of any UI toolkit.
//!
//! The panel calls [`ChatSession::submit`] when the user sends a message,
//! waits [`ChatSession::typing_delay`], then hands the responder's answer to
//! [`ChatSession::deliver`].

use crate::insights::AutoInsights;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use wqm_core::chat::ChatMessage;

/// Which chat panel a session backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    /// Floating toggle-able panel.
    Compact,
    /// Always-open panel embedded in the home page.
    Fullscreen,
}

/// A canned prompt offered as a one-click button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub prompt: &'static str,
}

const COMPACT_ACTIONS: [QuickAction; 3] = [
    QuickAction { label: "📊 Phân Tích", prompt: "phân tích heatmap" },
    QuickAction { label: "🚨 Rủi Ro", prompt: "hiển thị vùng nguy hiểm" },
    QuickAction { label: "💡 Khuyến Nghị", prompt: "đưa ra khuyến nghị" },
];

const FULLSCREEN_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "📊 Phân Tích Chi Tiết", prompt: "phân tích heatmap chi tiết" },
    QuickAction {
        label: "🚨 Cảnh Báo Khẩn Cấp",
        prompt: "hiển thị vùng nguy hiểm và cảnh báo khẩn cấp",
    },
    QuickAction {
        label: "💡 Khuyến Nghị Smart",
        prompt: "đưa ra khuyến nghị cải thiện và hành động",
    },
    QuickAction { label: "🔮 Dự Báo Xu Hướng", prompt: "dự báo xu hướng 7 ngày tới" },
];

/// Pause in milliseconds before a quick action is sent as if typed.
pub const QUICK_ACTION_DISPATCH_MS: u32 = 100;

/// Unread insights shown on the fullscreen header at start.
const INITIAL_NOTIFICATIONS: u32 = 3;

impl PanelStyle {
    pub fn greeting(&self) -> &'static str {
        match self {
            PanelStyle::Compact => "🌊 Xin chào! Mình là AquaBot - trợ lý thông minh về chất lượng nước. Mình có thể giúp bạn phân tích heatmap, nhận diện rủi ro và đưa ra khuyến nghị. Hãy thử hỏi \"phân tích heatmap\" hoặc trò chuyện bình thường nhé! 💧",
            PanelStyle::Fullscreen => "🌊 Xin chào! Mình là AquaBot - trợ lý AI thông minh về chất lượng nước. Mình có thể giúp bạn:\n\n📊 Phân tích heatmap chi tiết\n🚨 Nhận diện vùng rủi ro\n💡 Đưa ra khuyến nghị cải thiện\n📈 Dự báo xu hướng chất lượng\n\nHãy thử hỏi \"phân tích heatmap\" hoặc trò chuyện tự nhiên nhé! 💧",
        }
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        match self {
            PanelStyle::Compact => &COMPACT_ACTIONS,
            PanelStyle::Fullscreen => &FULLSCREEN_ACTIONS,
        }
    }

    /// The embedded panel never posts unprompted insights.
    pub fn allows_auto_insights(&self) -> bool {
        matches!(self, PanelStyle::Compact)
    }
}

/// How a message was sent; affects the simulated typing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Typed,
    QuickAction,
}

/// Transcript and flags for one chat panel.
#[derive(Debug, Clone)]
pub struct ChatSession {
    style: PanelStyle,
    messages: Vec<ChatMessage>,
    typing: bool,
    open: bool,
    auto_analysis: bool,
    notifications: u32,
    auto: AutoInsights,
    draft: String,
}

impl ChatSession {
    /// New session seeded with the panel's greeting.
    pub fn new(style: PanelStyle, now: DateTime<Utc>) -> Self {
        Self {
            style,
            messages: vec![ChatMessage::assistant(style.greeting(), now)],
            typing: false,
            open: style == PanelStyle::Fullscreen,
            auto_analysis: true,
            notifications: INITIAL_NOTIFICATIONS,
            auto: AutoInsights::default(),
            draft: String::new(),
        }
    }

    pub fn style(&self) -> PanelStyle {
        self.style
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn auto_analysis(&self) -> bool {
        self.auto_analysis
    }

    pub fn notifications(&self) -> u32 {
        self.notifications
    }

    /// Text in the input box, not yet sent.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn auto_insights(&self) -> &AutoInsights {
        &self.auto
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_auto_analysis(&mut self) {
        self.auto_analysis = !self.auto_analysis;
    }

    pub fn clear_notifications(&mut self) {
        self.notifications = 0;
    }

    /// Whether the send button is enabled for `input`.
    pub fn can_send(&self, input: &str) -> bool {
        !self.typing && !input.trim().is_empty()
    }

    /// Append the user's message and mark a reply as pending.
    ///
    /// Returns the prompt to answer, or `None` when the input is blank or a
    /// reply is already pending. A successful submit empties the draft,
    /// whether the text came from the draft or from a quick action.
    pub fn submit(&mut self, input: &str, now: DateTime<Utc>) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        self.messages.push(ChatMessage::user(input, now));
        self.typing = true;
        self.draft.clear();
        Some(input.to_string())
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn deliver(&mut self, reply: impl Into<String>, now: DateTime<Utc>) {
        self.messages.push(ChatMessage::assistant(reply, now));
        self.typing = false;
    }

    /// Whether the periodic insight loop should be running.
    pub fn auto_insights_active(&self) -> bool {
        self.open && self.auto_analysis && self.style.allows_auto_insights()
    }

    /// Append an unprompted insight and count it as unread.
    pub fn push_insight(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.notifications += 1;
    }

    /// One tick of the auto-insight loop. Does nothing while inactive.
    pub fn tick_insights<R: Rng>(&mut self, rng: &mut R, now: DateTime<Utc>) -> bool {
        if !self.auto_insights_active() {
            return false;
        }
        match self.auto.tick(rng, now) {
            Some(message) => {
                self.push_insight(message);
                true
            }
            None => false,
        }
    }

    /// Simulated typing time before the reply appears.
    pub fn typing_delay<R: Rng>(&self, origin: Origin, rng: &mut R) -> Duration {
        match (self.style, origin) {
            (PanelStyle::Compact, Origin::Typed) => Duration::milliseconds(1000),
            (PanelStyle::Compact, Origin::QuickAction) => Duration::milliseconds(800),
            (PanelStyle::Fullscreen, Origin::Typed) => {
                Duration::milliseconds(1200 + rng.gen_range(0..800))
            }
            (PanelStyle::Fullscreen, Origin::QuickAction) => Duration::milliseconds(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wqm_core::chat::Role;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new(PanelStyle::Compact, now());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert!(!session.is_open());
        assert!(ChatSession::new(PanelStyle::Fullscreen, now()).is_open());
    }

    #[test]
    fn test_submit_and_deliver() {
        let mut session = ChatSession::new(PanelStyle::Compact, now());
        let prompt = session.submit("analyze the heatmap", now()).unwrap();
        assert_eq!(prompt, "analyze the heatmap");
        assert!(session.is_typing());
        assert_eq!(session.messages().last().unwrap().role, Role::User);

        // a second send while typing is ignored
        assert!(session.submit("again", now()).is_none());
        assert_eq!(session.messages().len(), 2);

        session.deliver("reply", now());
        assert!(!session.is_typing());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, "reply");
    }

    #[test]
    fn test_submit_clears_draft() {
        let mut session = ChatSession::new(PanelStyle::Compact, now());
        session.set_draft("what is tds?");
        let typed = session.draft().to_string();
        assert_eq!(session.submit(&typed, now()).as_deref(), Some("what is tds?"));
        assert_eq!(session.draft(), "");

        // kept while a reply is pending
        session.set_draft("and ph?");
        let typed = session.draft().to_string();
        assert!(session.submit(&typed, now()).is_none());
        assert_eq!(session.draft(), "and ph?");
    }

    #[test]
    fn test_quick_action_replaces_half_typed_draft() {
        let mut session = ChatSession::new(PanelStyle::Fullscreen, now());
        session.set_draft("half typ");
        let action = PanelStyle::Fullscreen.quick_actions()[0];
        session.set_draft(action.prompt);
        assert_eq!(session.draft(), action.prompt);
        let prompt = session.submit(action.prompt, now()).unwrap();
        assert_eq!(prompt, action.prompt);
        assert_eq!(session.draft(), "");
        assert_eq!(session.messages().last().unwrap().text, action.prompt);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new(PanelStyle::Compact, now());
        assert!(session.submit("   ", now()).is_none());
        assert!(session.submit("", now()).is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_auto_insights_gating() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ChatSession::new(PanelStyle::Compact, now());
        assert!(!session.auto_insights_active());
        for _ in 0..50 {
            assert!(!session.tick_insights(&mut rng, now()));
        }
        session.toggle_open();
        assert!(session.auto_insights_active());
        session.toggle_auto_analysis();
        assert!(!session.auto_insights_active());

        let fullscreen = ChatSession::new(PanelStyle::Fullscreen, now());
        assert!(!fullscreen.auto_insights_active());
    }

    #[test]
    fn test_insights_bump_notifications() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = ChatSession::new(PanelStyle::Compact, now());
        session.toggle_open();
        let posted = (0..200).filter(|_| session.tick_insights(&mut rng, now())).count() as u32;
        assert!(posted > 0);
        assert_eq!(session.notifications(), INITIAL_NOTIFICATIONS + posted);
        assert_eq!(session.messages().len(), 1 + posted as usize);
        session.clear_notifications();
        assert_eq!(session.notifications(), 0);
    }

    #[test]
    fn test_typing_delays() {
        let mut rng = StdRng::seed_from_u64(2);
        let compact = ChatSession::new(PanelStyle::Compact, now());
        assert_eq!(compact.typing_delay(Origin::Typed, &mut rng), Duration::milliseconds(1000));
        assert_eq!(compact.typing_delay(Origin::QuickAction, &mut rng), Duration::milliseconds(800));
        let full = ChatSession::new(PanelStyle::Fullscreen, now());
        for _ in 0..50 {
            let d = full.typing_delay(Origin::Typed, &mut rng);
            assert!(d >= Duration::milliseconds(1200) && d < Duration::milliseconds(2000));
        }
    }

    #[test]
    fn test_quick_actions_per_style() {
        assert_eq!(PanelStyle::Compact.quick_actions().len(), 3);
        assert_eq!(PanelStyle::Fullscreen.quick_actions().len(), 4);
        assert!(PanelStyle::Compact.quick_actions()[0].prompt.contains("heatmap"));
    }
}
