//! Request/response seam for the chatbot.
//!
//! Callers talk to a [`Responder`]; the shipped implementation is a keyword
//! table, but any backend that maps a prompt to a [`Reply`] can replace it.

use crate::insights::random_insight;
use rand::Rng;

/// What a reply is about. Lets the UI style replies without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Analysis,
    Risk,
    BestRegions,
    Trend,
    Recommendation,
    Tds,
    Ph,
    Turbidity,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub topic: Topic,
    pub text: String,
}

pub trait Responder {
    fn respond(&mut self, prompt: &str) -> Reply;
}

/// Marker that opens every heatmap analysis reply.
pub const ANALYSIS_PREFIX: &str = "🤖 HEATMAP ANALYSIS: ";

const ANALYSIS_FOLLOW_UP: &str = "\n\nBased on current data, I detect several areas requiring attention. Would you like detailed analysis of a specific region?";

const RISK_REPLY: &str = "🚨 CRITICAL ZONES DETECTED:\n• Thai Nguyen: 300+ mg/L TDS (DANGEROUS)\n• Hai Phong: 220 mg/L TDS (POOR)\n\nImmediate recommendations:\n1. Stop water consumption in critical zones\n2. Deploy emergency filtration\n3. Investigate pollution sources\n4. Implement 24/7 monitoring";

const BEST_REPLY: &str = "✅ TOP PERFORMING REGIONS:\n• Nha Trang: 85 mg/L TDS (EXCELLENT)\n• Da Nang: 95 mg/L TDS (EXCELLENT)\n• Hue: 110 mg/L TDS (GOOD)\n\nThese areas demonstrate excellent water management practices and can serve as models for other regions.";

const TREND_REPLY: &str = "📈 TREND ANALYSIS (7-day):\n• Northern regions: Declining quality (-15%)\n• Central regions: Stable to improving (+5%)\n• Southern regions: Mixed signals\n\nPREDICTION: Without intervention, 3 additional regions may enter \"Poor\" category within 30 days.";

const RECOMMENDATION_REPLY: &str = "💡 AI RECOMMENDATIONS:\n1. Priority filtration in Thai Nguyen & Hai Phong\n2. Increase monitoring frequency in HCM area\n3. Infrastructure upgrade needed in Can Tho\n4. Success model replication from Nha Trang\n5. Emergency response team deployment\n\nEstimated impact: 60% quality improvement in 90 days.";

const TDS_REPLY: &str = "🔬 TDS DEEP ANALYSIS:\nTotal Dissolved Solids measure dissolved minerals. Current national average: 165 mg/L (Moderate)\n\n📊 BREAKDOWN:\n• Excellent (0-100): 2 regions\n• Good (100-150): 3 regions\n• Moderate (150-200): 3 regions\n• Poor (200-250): 1 region\n• Dangerous (250+): 1 region\n\nHigher levels indicate contamination or excessive mineralization.";

const PH_REPLY: &str = "⚗️ pH MONITORING REPORT:\npH measures acidity/alkalinity (0-14 scale). Drinking water: 6.5-8.5 optimal.\n\n📈 CURRENT STATUS:\n• Average pH: 7.1 (Good)\n• Range: 6.2 - 7.6\n• Outliers: Thai Nguyen (6.2 - Acidic)\n\nValues outside range may cause pipe corrosion or health issues.";

const TURBIDITY_REPLY: &str = "💧 TURBIDITY ASSESSMENT:\nMeasures water clarity. Standard: <2 NTU for drinking water.\n\n🔍 ANALYSIS:\n• Average: 3.2 NTU (Above standard)\n• Clearest: Nha Trang (1.5 NTU)\n• Cloudiest: Thai Nguyen (8.5 NTU)\n\nHigh turbidity indicates suspended particles that can harbor harmful microorganisms.";

const HELP_REPLY: &str = "🤖 AI WATER ASSISTANT: I can analyze heatmap data, identify risks, provide recommendations, and explain water quality parameters. Try asking:\n• \"Analyze the heatmap\"\n• \"Show me dangerous areas\"\n• \"What are the trends?\"\n• \"Give me recommendations\"";

/// Keyword groups in priority order. The first group with a keyword
/// contained in the lower-cased prompt wins.
const KEYWORD_TABLE: [(Topic, &[&str]); 8] = [
    (Topic::Analysis, &["analyze", "analysis", "heatmap", "overview"]),
    (Topic::Risk, &["dangerous", "alert", "risk"]),
    (Topic::BestRegions, &["best", "excellent", "good"]),
    (Topic::Trend, &["trend", "prediction", "forecast"]),
    (Topic::Recommendation, &["recommendation", "solution", "fix"]),
    (Topic::Tds, &["tds", "total dissolved solids"]),
    (Topic::Ph, &["ph", "acid"]),
    (Topic::Turbidity, &["turbidity", "cloudy", "clear"]),
];

/// Topic for a prompt, falling back to [`Topic::Help`].
pub fn classify(prompt: &str) -> Topic {
    let q = prompt.to_lowercase();
    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| q.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Help)
}

/// Canned keyword-table responder. The RNG picks the quoted insight for
/// analysis replies.
#[derive(Debug, Clone)]
pub struct KeywordResponder<R> {
    rng: R,
}

impl<R: Rng> KeywordResponder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Responder for KeywordResponder<R> {
    fn respond(&mut self, prompt: &str) -> Reply {
        let topic = classify(prompt);
        log::debug!("assistant routed prompt to {:?}", topic);
        let text = match topic {
            Topic::Analysis => format!(
                "{}{}{}",
                ANALYSIS_PREFIX,
                random_insight(&mut self.rng),
                ANALYSIS_FOLLOW_UP
            ),
            Topic::Risk => RISK_REPLY.to_string(),
            Topic::BestRegions => BEST_REPLY.to_string(),
            Topic::Trend => TREND_REPLY.to_string(),
            Topic::Recommendation => RECOMMENDATION_REPLY.to_string(),
            Topic::Tds => TDS_REPLY.to_string(),
            Topic::Ph => PH_REPLY.to_string(),
            Topic::Turbidity => TURBIDITY_REPLY.to_string(),
            Topic::Help => HELP_REPLY.to_string(),
        };
        Reply { topic, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::HEATMAP_INSIGHTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn responder() -> KeywordResponder<StdRng> {
        KeywordResponder::new(StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_analysis_reply_quotes_an_insight() {
        let mut bot = responder();
        for prompt in ["Analyze the heatmap", "HEATMAP please", "give me an analysis", "phân tích heatmap"] {
            let reply = bot.respond(prompt);
            assert_eq!(reply.topic, Topic::Analysis);
            let body = reply.text.strip_prefix(ANALYSIS_PREFIX).unwrap();
            assert!(
                HEATMAP_INSIGHTS.iter().any(|i| body.starts_with(i)),
                "unexpected insight in {body}"
            );
        }
    }

    #[test]
    fn test_priority_order() {
        // "analysis" outranks "risk"
        assert_eq!(classify("risk analysis"), Topic::Analysis);
        // "dangerous" outranks "tds"
        assert_eq!(classify("dangerous tds"), Topic::Risk);
        // "good" outranks "forecast"
        assert_eq!(classify("good forecast"), Topic::BestRegions);
        assert_eq!(classify("what is the trend"), Topic::Trend);
        assert_eq!(classify("any solution?"), Topic::Recommendation);
        assert_eq!(classify("Total Dissolved Solids"), Topic::Tds);
        assert_eq!(classify("is it acid"), Topic::Ph);
        assert_eq!(classify("so cloudy"), Topic::Turbidity);
    }

    #[test]
    fn test_fallback_is_help() {
        let mut bot = responder();
        let reply = bot.respond("hello there");
        assert_eq!(reply.topic, Topic::Help);
        assert!(reply.text.starts_with("🤖 AI WATER ASSISTANT"));
        assert_eq!(bot.respond("").topic, Topic::Help);
    }

    #[test]
    fn test_fixed_replies_are_deterministic() {
        let mut bot = responder();
        let a = bot.respond("show me dangerous areas");
        let b = bot.respond("ALERT");
        assert_eq!(a, Reply { topic: Topic::Risk, text: b.text.clone() });
    }
}
