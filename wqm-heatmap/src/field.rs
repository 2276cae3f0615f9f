//! Gaussian heat-zone compositor.
//!
//! Every source spreads `intensity · exp(−d² / 2σ²)` over the logical grid.
//! A pixel takes the weight-averaged colour of the sources reaching it, and
//! an opacity of `1 − Π(1 − wᵢ)` scaled by `max_alpha`.

use crate::color::Rgb;
use crate::layout::{hotspots, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use wqm_core::region::Region;

/// TDS (mg/L) that maps to full intensity.
const FULL_INTENSITY_TDS: f64 = 300.0;
const MIN_INTENSITY: f64 = 0.25;

/// One heat zone on the logical grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    pub x: f64,
    pub y: f64,
    /// Peak weight in `[0, 1]`.
    pub intensity: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatField {
    pub sources: Vec<HeatSource>,
    /// Gaussian spread in logical units.
    pub sigma: f64,
    /// Opacity of a fully saturated pixel, `[0, 1]`.
    pub max_alpha: f64,
    /// Summed weight below which a pixel stays transparent.
    pub cutoff: f64,
}

impl Default for HeatField {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            sigma: 70.0,
            max_alpha: 0.8,
            cutoff: 0.02,
        }
    }
}

impl HeatField {
    pub fn new(sources: Vec<HeatSource>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// One source per placed region: colour from its tier, intensity from TDS.
    pub fn from_regions(regions: &[Region]) -> Self {
        let sources = hotspots(regions)
            .into_iter()
            .map(|spot| HeatSource {
                x: spot.x,
                y: spot.y,
                intensity: intensity_for_tds(spot.region.tds),
                color: Rgb::from_hex(spot.region.level.color()).unwrap_or(Rgb::new(255, 255, 255)),
            })
            .collect();
        Self::new(sources)
    }

    /// RGBA of the logical point `(x, y)`; `[0, 0, 0, 0]` outside every zone.
    pub fn sample(&self, x: f64, y: f64) -> [u8; 4] {
        let two_sigma_sq = 2.0 * self.sigma * self.sigma;
        // beyond 4σ the weight is below 0.04 % of peak
        let reach_sq = 16.0 * self.sigma * self.sigma;

        let mut total = 0.0;
        let mut transparency = 1.0;
        let (mut r, mut g, mut b) = (0.0, 0.0, 0.0);
        for source in &self.sources {
            let dx = x - source.x;
            let dy = y - source.y;
            let d_sq = dx * dx + dy * dy;
            if d_sq > reach_sq {
                continue;
            }
            let w = source.intensity.clamp(0.0, 1.0) * (-d_sq / two_sigma_sq).exp();
            total += w;
            transparency *= 1.0 - w;
            r += w * source.color.r as f64;
            g += w * source.color.g as f64;
            b += w * source.color.b as f64;
        }

        if total < self.cutoff {
            return [0, 0, 0, 0];
        }
        let alpha = (1.0 - transparency) * self.max_alpha.clamp(0.0, 1.0);
        [
            channel(r / total),
            channel(g / total),
            channel(b / total),
            channel(alpha * 255.0),
        ]
    }

    /// Render to a `width × height` RGBA buffer (row-major, 4 bytes per pixel).
    pub fn render(&self, width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        if width == 0 || height == 0 {
            return pixels;
        }
        let sx = LOGICAL_WIDTH / width as f64;
        let sy = LOGICAL_HEIGHT / height as f64;
        for py in 0..height {
            let y = (py as f64 + 0.5) * sy;
            for px in 0..width {
                let x = (px as f64 + 0.5) * sx;
                pixels.extend_from_slice(&self.sample(x, y));
            }
        }
        log::debug!(
            "heatmap rendered {}x{} from {} sources",
            width,
            height,
            self.sources.len()
        );
        pixels
    }
}

/// Heat intensity for a TDS value: `tds / 300`, clamped to `[0.25, 1]`.
pub fn intensity_for_tds(tds: f64) -> f64 {
    (tds / FULL_INTENSITY_TDS).clamp(MIN_INTENSITY, 1.0)
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use wqm_core::quality::QualityLevel;
    use wqm_core::region::Coordinates;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn source(x: f64, y: f64, intensity: f64, color: Rgb) -> HeatSource {
        HeatSource { x, y, intensity, color }
    }

    #[test]
    fn test_center_takes_source_color() {
        let field = HeatField::new(vec![source(600.0, 400.0, 1.0, RED)]);
        let px = field.sample(600.0, 400.0);
        assert_eq!(&px[..3], &[255, 0, 0]);
        assert_eq!(px[3], channel(0.8 * 255.0));
    }

    #[test]
    fn test_far_pixels_are_transparent() {
        let field = HeatField::new(vec![source(100.0, 100.0, 1.0, RED)]);
        assert_eq!(field.sample(1100.0, 700.0), [0, 0, 0, 0]);
        assert_eq!(HeatField::default().sample(10.0, 10.0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_alpha_falls_off_with_distance() {
        let field = HeatField::new(vec![source(600.0, 400.0, 1.0, RED)]);
        let near = field.sample(620.0, 400.0)[3];
        let mid = field.sample(680.0, 400.0)[3];
        let far = field.sample(760.0, 400.0)[3];
        assert!(near > mid && mid > far, "{near} {mid} {far}");
    }

    #[test]
    fn test_midpoint_blends_equal_sources() {
        let field = HeatField::new(vec![
            source(500.0, 400.0, 1.0, RED),
            source(700.0, 400.0, 1.0, BLUE),
        ]);
        let px = field.sample(600.0, 400.0);
        assert!((px[0] as i32 - 128).abs() <= 1);
        assert_eq!(px[1], 0);
        assert!((px[2] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_stronger_source_dominates_blend() {
        let field = HeatField::new(vec![
            source(500.0, 400.0, 1.0, RED),
            source(700.0, 400.0, 0.25, BLUE),
        ]);
        let px = field.sample(600.0, 400.0);
        assert!(px[0] > px[2]);
    }

    #[test]
    fn test_render_dimensions_and_scaling() {
        let field = HeatField::new(vec![source(600.0, 400.0, 1.0, RED)]);
        let buf = field.render(120, 80);
        assert_eq!(buf.len(), 120 * 80 * 4);
        // pixel (60, 40) samples logical (605, 405), right next to the source
        let i = (40 * 120 + 60) * 4;
        assert_eq!(buf[i], 255);
        assert!(buf[i + 3] > 150);
        // corner pixel is empty
        assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
        assert!(field.render(0, 10).is_empty());
    }

    #[test]
    fn test_from_regions_uses_tier_color_and_tds() {
        let regions = vec![
            Region {
                id: 10,
                name: "Thai Nguyen".to_string(),
                tds: 300.0,
                ph: 6.2,
                turbidity: 8.5,
                level: QualityLevel::Dangerous,
                coordinates: Coordinates { lat: 21.59, lng: 105.84 },
            },
            Region {
                id: 99,
                name: "Nowhere".to_string(),
                tds: 50.0,
                ph: 7.0,
                turbidity: 1.0,
                level: QualityLevel::Excellent,
                coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            },
        ];
        let field = HeatField::from_regions(&regions);
        assert_eq!(field.sources.len(), 1);
        assert_eq!(field.sources[0].color, Rgb::new(0xef, 0x44, 0x44));
        assert!((field.sources[0].intensity - 1.0).abs() < 1e-9);
        assert!((intensity_for_tds(30.0) - 0.25).abs() < 1e-9);
        assert!((intensity_for_tds(150.0) - 0.5).abs() < 1e-9);
    }
}
