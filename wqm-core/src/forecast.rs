use crate::error::Result;
use crate::region::{parse_field, text_field};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One day of the mock 7-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day: String,
    pub tds: f64,
    pub ph: f64,
    pub turbidity: f64,
}

impl ForecastPoint {
    /// Parse a CSV string of forecast rows.
    ///
    /// Expected columns (with headers): `day,tds,ph,turbidity`
    pub fn parse_forecast_csv(csv_object: &str) -> Result<Vec<ForecastPoint>> {
        let mut points = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            points.push(ForecastPoint {
                day: text_field(&record, 0, "day")?.to_string(),
                tds: parse_field(&record, 1, "tds")?,
                ph: parse_field(&record, 2, "ph")?,
                turbidity: parse_field(&record, 3, "turbidity")?,
            });
        }
        Ok(points)
    }
}

/// Which measurement a chart series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Tds,
    Ph,
    Turbidity,
}

impl Parameter {
    /// pH and turbidity are small numbers next to TDS, so they are drawn
    /// multiplied by ten and shown unscaled in tooltips.
    pub fn chart_scale(&self) -> f64 {
        match self {
            Parameter::Tds => 1.0,
            Parameter::Ph | Parameter::Turbidity => 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Tds => "🔬 TDS (mg/L)",
            Parameter::Ph => "⚗️ pH (×10)",
            Parameter::Turbidity => "💧 Độ Đục (×10)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Parameter::Tds => "rgba(99, 179, 237, 0.9)",
            Parameter::Ph => "rgba(147, 112, 219, 0.9)",
            Parameter::Turbidity => "rgba(255, 182, 115, 0.9)",
        }
    }

    fn read(&self, point: &ForecastPoint) -> f64 {
        match self {
            Parameter::Tds => point.tds,
            Parameter::Ph => point.ph,
            Parameter::Turbidity => point.turbidity,
        }
    }

    /// Tooltip text for a plotted (scaled) value.
    pub fn format_plotted(&self, plotted: f64) -> String {
        let raw = plotted / self.chart_scale();
        match self {
            Parameter::Tds => format!("{} mg/L", raw),
            Parameter::Ph => format!("{:.1}", raw),
            Parameter::Turbidity => format!("{:.1} NTU", raw),
        }
    }
}

/// A single line on the forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub parameter: Parameter,
    pub label: &'static str,
    pub color: &'static str,
    pub fill: bool,
    /// Plotted values, already multiplied by the parameter's chart scale.
    pub values: Vec<f64>,
    /// Tooltip strings, one per value.
    pub tooltips: Vec<String>,
}

/// Build the three chart lines (TDS, pH, turbidity) for a forecast.
pub fn chart_series(points: &[ForecastPoint]) -> Vec<ChartSeries> {
    [Parameter::Tds, Parameter::Ph, Parameter::Turbidity]
        .into_iter()
        .map(|parameter| {
            let values: Vec<f64> = points
                .iter()
                .map(|p| parameter.read(p) * parameter.chart_scale())
                .collect();
            let tooltips = values.iter().map(|v| parameter.format_plotted(*v)).collect();
            ChartSeries {
                parameter,
                label: parameter.label(),
                color: parameter.color(),
                fill: parameter == Parameter::Tds,
                values,
                tooltips,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
day,tds,ph,turbidity
Mon,120,7.2,2.3
Tue,125,7.1,2.5
";

    #[test]
    fn test_parse_forecast_csv() {
        let points = ForecastPoint::parse_forecast_csv(SAMPLE).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].day, "Mon");
        assert!((points[1].turbidity - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chart_series_scaling() {
        let points = ForecastPoint::parse_forecast_csv(SAMPLE).unwrap();
        let series = chart_series(&points);
        assert_eq!(series.len(), 3);

        assert_eq!(series[0].parameter, Parameter::Tds);
        assert!(series[0].fill);
        assert!((series[0].values[0] - 120.0).abs() < 1e-9);
        assert_eq!(series[0].tooltips[0], "120 mg/L");

        assert!((series[1].values[0] - 72.0).abs() < 1e-9);
        assert_eq!(series[1].tooltips[0], "7.2");

        assert!((series[2].values[1] - 25.0).abs() < 1e-9);
        assert_eq!(series[2].tooltips[1], "2.5 NTU");
        assert!(!series[2].fill);
    }
}
