use crate::error::WqmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half-open measurement range `[min, max)`. `max` may be `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Threshold ranges for the three measured parameters of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub tds: Range,
    pub ph: Range,
    pub turbidity: Range,
}

/// Water quality tier, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Excellent,
    Good,
    Moderate,
    Poor,
    Dangerous,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 5] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Moderate,
        QualityLevel::Poor,
        QualityLevel::Dangerous,
    ];

    /// Lower-case key used in the fixtures.
    pub fn key(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "excellent",
            QualityLevel::Good => "good",
            QualityLevel::Moderate => "moderate",
            QualityLevel::Poor => "poor",
            QualityLevel::Dangerous => "dangerous",
        }
    }

    /// English label shown on badges and in the legend.
    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Good => "Good",
            QualityLevel::Moderate => "Moderate",
            QualityLevel::Poor => "Poor",
            QualityLevel::Dangerous => "Dangerous",
        }
    }

    /// Hex colour used for badges, hotspots and heat zones.
    pub fn color(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "#10b981",
            QualityLevel::Good => "#22d3ee",
            QualityLevel::Moderate => "#fbbf24",
            QualityLevel::Poor => "#f97316",
            QualityLevel::Dangerous => "#ef4444",
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        match self {
            QualityLevel::Excellent => Thresholds {
                tds: Range::new(0.0, 100.0),
                ph: Range::new(7.0, 8.5),
                turbidity: Range::new(0.0, 2.0),
            },
            QualityLevel::Good => Thresholds {
                tds: Range::new(100.0, 150.0),
                ph: Range::new(6.5, 7.0),
                turbidity: Range::new(2.0, 3.0),
            },
            QualityLevel::Moderate => Thresholds {
                tds: Range::new(150.0, 200.0),
                ph: Range::new(6.0, 6.5),
                turbidity: Range::new(3.0, 5.0),
            },
            QualityLevel::Poor => Thresholds {
                tds: Range::new(200.0, 250.0),
                ph: Range::new(5.5, 6.0),
                turbidity: Range::new(5.0, 8.0),
            },
            QualityLevel::Dangerous => Thresholds {
                tds: Range::new(250.0, f64::INFINITY),
                ph: Range::new(0.0, 5.5),
                turbidity: Range::new(8.0, f64::INFINITY),
            },
        }
    }

    /// Classify a TDS value (mg/L) against the thresholds table.
    ///
    /// Values below zero fall into the best tier.
    pub fn from_tds(tds: f64) -> QualityLevel {
        QualityLevel::ALL
            .into_iter()
            .find(|level| level.thresholds().tds.contains(tds))
            .unwrap_or(if tds < 0.0 {
                QualityLevel::Excellent
            } else {
                QualityLevel::Dangerous
            })
    }

    /// Vietnamese label used for device readings.
    pub fn reading_label(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Tuyệt vời",
            QualityLevel::Good => "Tốt",
            QualityLevel::Moderate => "Trung bình",
            QualityLevel::Poor => "Kém",
            QualityLevel::Dangerous => "Nguy hiểm",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "🟢",
            QualityLevel::Good => "🔵",
            QualityLevel::Moderate => "🟡",
            QualityLevel::Poor => "🟠",
            QualityLevel::Dangerous => "🔴",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QualityLevel {
    type Err = WqmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        QualityLevel::ALL
            .into_iter()
            .find(|level| level.key() == key)
            .ok_or_else(|| WqmError::UnknownLevel(s.to_string()))
    }
}

/// Colour tone of a per-parameter status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Bad,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Good => "#16a34a",
            Tone::Warning => "#ca8a04",
            Tone::Bad => "#dc2626",
        }
    }
}

/// Short status shown under a measurement in the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterStatus {
    pub label: &'static str,
    pub tone: Tone,
}

impl ParameterStatus {
    const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

pub fn tds_status(tds: f64) -> ParameterStatus {
    if tds < 150.0 {
        ParameterStatus::new("Tốt", Tone::Good)
    } else if tds < 200.0 {
        ParameterStatus::new("Trung bình", Tone::Warning)
    } else {
        ParameterStatus::new("Cao", Tone::Bad)
    }
}

pub fn ph_status(ph: f64) -> ParameterStatus {
    if (6.5..=8.5).contains(&ph) {
        ParameterStatus::new("Bình thường", Tone::Good)
    } else {
        ParameterStatus::new("Ngoài chuẩn", Tone::Bad)
    }
}

pub fn turbidity_status(turbidity: f64) -> ParameterStatus {
    if turbidity < 2.0 {
        ParameterStatus::new("Trong", Tone::Good)
    } else if turbidity < 5.0 {
        ParameterStatus::new("Hơi đục", Tone::Warning)
    } else {
        ParameterStatus::new("Đục", Tone::Bad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(QualityLevel::Excellent < QualityLevel::Good);
        assert!(QualityLevel::Poor < QualityLevel::Dangerous);
        let mut shuffled = vec![
            QualityLevel::Dangerous,
            QualityLevel::Good,
            QualityLevel::Excellent,
            QualityLevel::Poor,
            QualityLevel::Moderate,
        ];
        shuffled.sort();
        assert_eq!(shuffled, QualityLevel::ALL.to_vec());
    }

    #[test]
    fn test_from_tds_boundaries() {
        assert_eq!(QualityLevel::from_tds(0.0), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_tds(99.9), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_tds(100.0), QualityLevel::Good);
        assert_eq!(QualityLevel::from_tds(150.0), QualityLevel::Moderate);
        assert_eq!(QualityLevel::from_tds(200.0), QualityLevel::Poor);
        assert_eq!(QualityLevel::from_tds(250.0), QualityLevel::Dangerous);
        assert_eq!(QualityLevel::from_tds(1000.0), QualityLevel::Dangerous);
        assert_eq!(QualityLevel::from_tds(-5.0), QualityLevel::Excellent);
    }

    #[test]
    fn test_reading_labels() {
        assert_eq!(QualityLevel::from_tds(150.0).reading_label(), "Trung bình");
        assert_eq!(QualityLevel::from_tds(50.0).reading_label(), "Tuyệt vời");
        assert_eq!(QualityLevel::from_tds(260.0).reading_label(), "Nguy hiểm");
        assert_eq!(QualityLevel::from_tds(120.0).reading_label(), "Tốt");
        assert_eq!(QualityLevel::from_tds(230.0).reading_label(), "Kém");
    }

    #[test]
    fn test_parse_level_keys() {
        assert_eq!("good".parse::<QualityLevel>().unwrap(), QualityLevel::Good);
        assert_eq!(" Dangerous ".parse::<QualityLevel>().unwrap(), QualityLevel::Dangerous);
        assert!("murky".parse::<QualityLevel>().is_err());
        for level in QualityLevel::ALL {
            assert_eq!(level.key().parse::<QualityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_parameter_statuses() {
        assert_eq!(tds_status(120.0).label, "Tốt");
        assert_eq!(tds_status(180.0).tone, Tone::Warning);
        assert_eq!(tds_status(300.0).label, "Cao");
        assert_eq!(ph_status(6.5).label, "Bình thường");
        assert_eq!(ph_status(8.5).label, "Bình thường");
        assert_eq!(ph_status(6.2).label, "Ngoài chuẩn");
        assert_eq!(turbidity_status(1.5).label, "Trong");
        assert_eq!(turbidity_status(4.1).label, "Hơi đục");
        assert_eq!(turbidity_status(8.5).tone, Tone::Bad);
    }
}
