//! Site configuration.
//!
//! Values come from the build environment so the same WASM bundle can be
//! rebranded without code changes:
//!
//! - `SAFEDROP_SITE_NAME` - brand shown in headers (default `SafeDrop`)
//! - `SAFEDROP_VIDEO_ID` - YouTube id of the demo video; no video when unset

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

pub const DEFAULT_SITE_NAME: &str = "SafeDrop";

/// Simulated save time for a device reading.
pub const SAVE_DELAY_MS: u32 = 800;

/// How long the "saved" badge stays up.
pub const SUCCESS_BADGE_MS: u32 = 3000;

/// Loop period while the auto-insight loop is paused.
pub const INSIGHT_IDLE_POLL_MS: u32 = 1000;

/// Pixel size of the heatmap raster; the canvas is stretched to its container.
pub const HEATMAP_RASTER_WIDTH: u32 = 480;
pub const HEATMAP_RASTER_HEIGHT: u32 = 320;

pub fn site_name() -> &'static str {
    resolve_site_name(option_env!("SAFEDROP_SITE_NAME"))
}

pub fn demo_video_id() -> Option<&'static str> {
    option_env!("SAFEDROP_VIDEO_ID").filter(|id| !id.trim().is_empty())
}

fn resolve_site_name(value: Option<&'static str>) -> &'static str {
    match value {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_SITE_NAME,
    }
}

/// YouTube embed URL without related videos or branding.
pub fn video_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?rel=0&modestbranding=1&showinfo=0",
        video_id
    )
}

/// `HH:MM` for chat bubbles and reading cards.
pub fn clock_label<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%H:%M").to_string()
}

/// `dd/mm/yyyy` for reading cards.
pub fn date_label<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%d/%m/%Y").to_string()
}

/// Convert a stored UTC instant to the browser's local time.
pub fn local<Tz: TimeZone>(ts: &DateTime<Tz>) -> DateTime<Local> {
    ts.with_timezone(&Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn site_name_falls_back_to_default() {
        assert_eq!(resolve_site_name(None), "SafeDrop");
        assert_eq!(resolve_site_name(Some("  ")), "SafeDrop");
        assert_eq!(resolve_site_name(Some("AquaWatch")), "AquaWatch");
    }

    #[test]
    fn embed_url_hides_related_videos() {
        let url = video_embed_url("abc123");
        assert!(url.starts_with("https://www.youtube.com/embed/abc123?"));
        assert!(url.contains("rel=0"));
    }

    #[test]
    fn labels_use_vietnamese_date_order() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 7, 4, 0).unwrap();
        assert_eq!(clock_label(&ts), "07:04");
        assert_eq!(date_label(&ts), "05/03/2024");
    }
}
