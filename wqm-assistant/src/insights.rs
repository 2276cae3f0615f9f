use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use wqm_core::chat::ChatMessage;

/// Findings quoted by the heatmap analysis reply.
pub const HEATMAP_INSIGHTS: [&str; 8] = [
    "🚨 ALERT: Thai Nguyen shows dangerous TDS levels (300+ mg/L). Immediate action required.",
    "📈 TREND: Water quality in central regions (Da Nang, Hue) showing consistent improvement over last 7 days.",
    "⚠️ WARNING: Hai Phong pollution levels increasing. Recommend enhanced monitoring.",
    "✅ POSITIVE: Nha Trang maintains excellent water quality standards.",
    "📊 ANALYSIS: 40% of monitored regions exceed WHO recommended TDS limits.",
    "🔍 INSIGHT: Southern region (HCM, Can Tho) requires infrastructure upgrades.",
    "💡 RECOMMENDATION: Deploy additional sensors in high-risk areas.",
    "🌊 QUALITY INDEX: Current national average TDS: 165 mg/L (Moderate)",
];

/// Unprompted status messages posted while auto-analysis is on.
pub const AUTO_MESSAGES: [&str; 7] = [
    "🤖 Auto-Analysis Complete: Detected quality deterioration in Northern region. Deploying additional monitoring sensors.",
    "📊 Real-time Update: Water quality index improved by 12% in Central Vietnam over the past 24 hours.",
    "⚠️ Predictive Alert: Hai Phong trending toward \"Dangerous\" category. Recommend immediate intervention.",
    "✅ System Health: All 10 monitoring stations online. Data accuracy: 98.7%.",
    "🔄 Quality Refresh: Updated TDS readings from 3 stations. Thai Nguyen requires urgent attention.",
    "💡 AI Insight: Seasonal rainfall patterns suggest quality improvement expected in Southern regions.",
    "🌊 Trend Analysis: Nha Trang maintains excellence - water treatment model recommended for replication.",
];

/// Pick one heatmap insight at random.
pub fn random_insight<R: Rng>(rng: &mut R) -> &'static str {
    HEATMAP_INSIGHTS
        .choose(rng)
        .copied()
        .unwrap_or(HEATMAP_INSIGHTS[0])
}

/// Periodic auto-insight generator.
///
/// Each tick posts a message with probability `chance`; the message is
/// back-dated to a random instant within `backdate`.
#[derive(Debug, Clone)]
pub struct AutoInsights {
    pub chance: f64,
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub backdate: Duration,
}

impl Default for AutoInsights {
    fn default() -> Self {
        Self {
            chance: 0.3,
            min_interval: Duration::seconds(30),
            max_interval: Duration::seconds(60),
            backdate: Duration::minutes(5),
        }
    }
}

impl AutoInsights {
    /// Delay until the next tick, uniform in `[min_interval, max_interval)`.
    pub fn next_interval<R: Rng>(&self, rng: &mut R) -> Duration {
        let min = self.min_interval.num_milliseconds();
        let max = self.max_interval.num_milliseconds();
        if max <= min {
            return self.min_interval;
        }
        Duration::milliseconds(rng.gen_range(min..max))
    }

    /// Roll for an insight at `now`.
    pub fn tick<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> Option<ChatMessage> {
        if !rng.gen_bool(self.chance.clamp(0.0, 1.0)) {
            return None;
        }
        let text = AUTO_MESSAGES.choose(rng).copied()?;
        let window = self.backdate.num_milliseconds().max(0);
        let offset = if window > 0 { rng.gen_range(0..window) } else { 0 };
        log::debug!("auto insight posted: {}", text);
        Some(ChatMessage::assistant(text, now - Duration::milliseconds(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_random_insight_is_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(HEATMAP_INSIGHTS.contains(&random_insight(&mut rng)));
        }
    }

    #[test]
    fn test_interval_within_bounds() {
        let auto = AutoInsights::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let d = auto.next_interval(&mut rng);
            assert!(d >= Duration::seconds(30) && d < Duration::seconds(60));
        }
    }

    #[test]
    fn test_tick_always_and_never() {
        let mut rng = StdRng::seed_from_u64(3);
        let always = AutoInsights {
            chance: 1.0,
            ..AutoInsights::default()
        };
        let never = AutoInsights {
            chance: 0.0,
            ..AutoInsights::default()
        };
        for _ in 0..20 {
            let msg = always.tick(&mut rng, now()).unwrap();
            assert!(AUTO_MESSAGES.contains(&msg.text.as_str()));
            assert!(!msg.is_user());
            assert!(msg.timestamp <= now());
            assert!(msg.timestamp > now() - Duration::minutes(5));
            assert!(never.tick(&mut rng, now()).is_none());
        }
    }

    #[test]
    fn test_tick_rate_is_roughly_thirty_percent() {
        let auto = AutoInsights::default();
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..2000).filter(|_| auto.tick(&mut rng, now()).is_some()).count();
        assert!((450..750).contains(&hits), "hits = {hits}");
    }
}
