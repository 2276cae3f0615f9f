use crate::region::Region;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable columns of the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Tds,
    Ph,
    Turbidity,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Tds,
        SortField::Ph,
        SortField::Turbidity,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SortField::Name => "🏙️ Vùng",
            SortField::Tds => "🔬 TDS",
            SortField::Ph => "⚗️ pH",
            SortField::Turbidity => "💧 Độ Đục",
        }
    }

    fn compare(&self, a: &Region, b: &Region) -> Ordering {
        match self {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Tds => a.tds.total_cmp(&b.tds),
            SortField::Ph => a.ph.total_cmp(&b.ph),
            SortField::Turbidity => a.turbidity.total_cmp(&b.turbidity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Current column and direction of the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }

    /// Indicator for a column header; `↕` for inactive columns.
    pub fn indicator(&self, field: SortField) -> &'static str {
        if self.field == field {
            self.direction.arrow()
        } else {
            "↕"
        }
    }
}

/// Stable sort of a copy of `regions`. Names compare case-folded.
pub fn sort_regions(regions: &[Region], state: SortState) -> Vec<Region> {
    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| {
        let ord = state.field.compare(a, b);
        match state.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::QualityLevel;
    use crate::region::Coordinates;

    fn region(id: u32, name: &str, tds: f64, ph: f64, turbidity: f64) -> Region {
        Region {
            id,
            name: name.to_string(),
            tds,
            ph,
            turbidity,
            level: QualityLevel::from_tds(tds),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    fn sample() -> Vec<Region> {
        vec![
            region(1, "hanoi", 120.0, 7.2, 2.3),
            region(2, "Da Nang", 95.0, 7.5, 1.8),
            region(3, "Thai Nguyen", 300.0, 6.2, 8.5),
            region(4, "Can Tho", 160.0, 7.0, 3.5),
            region(5, "Bien Hoa", 120.0, 7.1, 2.9),
        ]
    }

    fn ids(regions: &[Region]) -> Vec<u32> {
        regions.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_click_toggles_and_switches() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::Name);
        let state = state.clicked(SortField::Name);
        assert_eq!(state.direction, SortDirection::Desc);
        let state = state.clicked(SortField::Tds);
        assert_eq!(state.field, SortField::Tds);
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(state.indicator(SortField::Tds), "▲");
        assert_eq!(state.indicator(SortField::Ph), "↕");
    }

    #[test]
    fn test_name_sort_is_case_folded() {
        let sorted = sort_regions(&sample(), SortState::default());
        assert_eq!(ids(&sorted), vec![5, 4, 2, 1, 3]);
    }

    #[test]
    fn test_numeric_sort_is_stable() {
        let state = SortState {
            field: SortField::Tds,
            direction: SortDirection::Asc,
        };
        let sorted = sort_regions(&sample(), state);
        // hanoi (1) and Bien Hoa (5) tie on TDS and keep input order
        assert_eq!(ids(&sorted), vec![2, 1, 5, 4, 3]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for field in SortField::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let state = SortState { field, direction };
                let once = sort_regions(&sample(), state);
                let twice = sort_regions(&once, state);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_toggle_reverses_distinct_keys() {
        for field in [SortField::Name, SortField::Ph, SortField::Turbidity] {
            let asc = sort_regions(&sample(), SortState { field, direction: SortDirection::Asc });
            let desc = sort_regions(&sample(), SortState { field, direction: SortDirection::Desc });
            let mut reversed = ids(&asc);
            reversed.reverse();
            assert_eq!(ids(&desc), reversed, "{field:?}");
        }
    }
}
