use crate::quality::QualityLevel;
use crate::region::Region;
use serde::Serialize;

/// Summary row under the region table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub stations: usize,
    /// Mean TDS rounded to whole mg/L.
    pub avg_tds: i64,
    pub avg_ph: f64,
    pub avg_turbidity: f64,
}

impl RegionSummary {
    /// `None` when there are no regions to summarise.
    pub fn from_regions(regions: &[Region]) -> Option<Self> {
        if regions.is_empty() {
            return None;
        }
        let n = regions.len() as f64;
        let mean = |f: fn(&Region) -> f64| regions.iter().map(f).sum::<f64>() / n;
        Some(Self {
            stations: regions.len(),
            avg_tds: mean(|r| r.tds).round() as i64,
            avg_ph: mean(|r| r.ph),
            avg_turbidity: mean(|r| r.turbidity),
        })
    }

    pub fn avg_ph_display(&self) -> String {
        format!("{:.1}", self.avg_ph)
    }

    pub fn avg_turbidity_display(&self) -> String {
        format!("{:.1}", self.avg_turbidity)
    }
}

/// Number of regions in each tier, in tier order (empty tiers included).
pub fn level_counts(regions: &[Region]) -> Vec<(QualityLevel, usize)> {
    QualityLevel::ALL
        .into_iter()
        .map(|level| (level, regions.iter().filter(|r| r.level == level).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Coordinates;

    fn region(name: &str, tds: f64, ph: f64, turbidity: f64, level: QualityLevel) -> Region {
        Region {
            id: 0,
            name: name.to_string(),
            tds,
            ph,
            turbidity,
            level,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    #[test]
    fn test_summary_of_empty_is_none() {
        assert!(RegionSummary::from_regions(&[]).is_none());
    }

    #[test]
    fn test_summary_averages() {
        let regions = vec![
            region("a", 120.0, 7.2, 2.3, QualityLevel::Good),
            region("b", 181.0, 6.8, 4.1, QualityLevel::Moderate),
        ];
        let summary = RegionSummary::from_regions(&regions).unwrap();
        assert_eq!(summary.stations, 2);
        assert_eq!(summary.avg_tds, 151);
        assert_eq!(summary.avg_ph_display(), "7.0");
        assert_eq!(summary.avg_turbidity_display(), "3.2");
    }

    #[test]
    fn test_level_counts_cover_all_tiers() {
        let regions = vec![
            region("a", 120.0, 7.2, 2.3, QualityLevel::Good),
            region("b", 110.0, 7.3, 2.1, QualityLevel::Good),
            region("c", 300.0, 6.2, 8.5, QualityLevel::Dangerous),
        ];
        let counts = level_counts(&regions);
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], (QualityLevel::Excellent, 0));
        assert_eq!(counts[1], (QualityLevel::Good, 2));
        assert_eq!(counts[4], (QualityLevel::Dangerous, 1));
    }
}
