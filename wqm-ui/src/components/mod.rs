//! Reusable Dioxus RSX components for the SafeDrop dashboards.

mod chart_header;
mod chat_panel;
mod device_input;
mod error_display;
mod forecast_chart;
mod heatmap_view;
mod loading_spinner;
mod quality_legend;
mod region_table;
mod video_embed;

pub use chart_header::ChartHeader;
pub use chat_panel::ChatPanel;
pub use device_input::DeviceInput;
pub use error_display::ErrorDisplay;
pub use forecast_chart::ForecastChart;
pub use heatmap_view::HeatmapView;
pub use loading_spinner::LoadingSpinner;
pub use quality_legend::QualityLegend;
pub use region_table::RegionTable;
pub use video_embed::VideoEmbed;
