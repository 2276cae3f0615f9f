use wqm_core::region::Region;

pub const LOGICAL_WIDTH: f64 = 1200.0;
pub const LOGICAL_HEIGHT: f64 = 800.0;

/// Hand-placed hotspot positions on the logical grid, by region name.
const REGION_POSITIONS: [(&str, f64, f64); 10] = [
    ("Hanoi", 480.0, 200.0),
    ("Ho Chi Minh City", 520.0, 620.0),
    ("Da Nang", 630.0, 380.0),
    ("Hai Phong", 510.0, 240.0),
    ("Can Tho", 450.0, 400.0),
    ("Bien Hoa", 570.0, 640.0),
    ("Hue", 645.0, 430.0),
    ("Nha Trang", 675.0, 510.0),
    ("Vung Tau", 630.0, 680.0),
    ("Thai Nguyen", 510.0, 160.0),
];

/// Logical position of a region, if it has one.
pub fn position_for(name: &str) -> Option<(f64, f64)> {
    REGION_POSITIONS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, x, y)| (*x, *y))
}

/// A region placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot<'a> {
    pub region: &'a Region,
    pub x: f64,
    pub y: f64,
}

impl Hotspot<'_> {
    /// CSS `left` percentage.
    pub fn left_percent(&self) -> f64 {
        self.x / LOGICAL_WIDTH * 100.0
    }

    /// CSS `top` percentage.
    pub fn top_percent(&self) -> f64 {
        self.y / LOGICAL_HEIGHT * 100.0
    }
}

/// Regions with a known position, in input order. Unplaced regions are skipped.
pub fn hotspots(regions: &[Region]) -> Vec<Hotspot<'_>> {
    regions
        .iter()
        .filter_map(|region| {
            position_for(&region.name).map(|(x, y)| Hotspot { region, x, y })
        })
        .collect()
}
