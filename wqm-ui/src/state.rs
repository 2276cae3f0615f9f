//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wqm_core::forecast::ForecastPoint;
use wqm_core::reading::ReadingLog;
use wqm_core::region::Region;
use wqm_core::table::SortState;
use wqm_db::Database;

/// Shared application state for both dashboards.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Regions in fixture order
    pub regions: Signal<Vec<Region>>,
    /// 7-day forecast
    pub forecast: Signal<Vec<ForecastPoint>>,
    /// Region table sort
    pub sort_state: Signal<SortState>,
    /// Device readings entered this session, backed by the database
    pub readings: Signal<Option<ReadingLog<Database>>>,
    /// Id of the region under the pointer on the heatmap
    pub hovered_region: Signal<Option<u32>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            regions: Signal::new(Vec::new()),
            forecast: Signal::new(Vec::new()),
            sort_state: Signal::new(SortState::default()),
            readings: Signal::new(None),
            hovered_region: Signal::new(None),
        }
    }

    /// Load the embedded fixtures and publish them to the signals.
    ///
    /// A failure is shown through `error_msg`; loading always ends.
    pub fn load_fixtures(mut self, regions_csv: &str, forecast_csv: &str) {
        match FixtureData::load(regions_csv, forecast_csv) {
            Ok(data) => {
                log::info!(
                    "Loaded {} regions and {} forecast days",
                    data.regions.len(),
                    data.forecast.len()
                );
                self.regions.set(data.regions);
                self.forecast.set(data.forecast);
                self.readings.set(Some(data.readings));
            }
            Err(e) => {
                log::error!("Failed to load fixtures: {:#}", e);
                self.error_msg.set(Some(format!("Failed to load data: {}", e)));
            }
        }
        self.loading.set(false);
    }

    /// The region currently hovered on the heatmap.
    pub fn hovered(&self) -> Option<Region> {
        let id = (self.hovered_region)()?;
        self.regions.read().iter().find(|r| r.id == id).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the dashboards read from the embedded fixtures.
///
/// The database lives on only inside `readings`; regions and forecast are
/// queried once up front.
pub struct FixtureData {
    pub regions: Vec<Region>,
    pub forecast: Vec<ForecastPoint>,
    pub readings: ReadingLog<Database>,
}

impl FixtureData {
    pub fn load(regions_csv: &str, forecast_csv: &str) -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_regions(regions_csv)?;
        db.load_forecast(forecast_csv)?;
        Ok(Self {
            regions: db.query_regions()?,
            forecast: db.query_forecast()?,
            readings: ReadingLog::new(db),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const REGIONS: &str = "\
id,name,tds,ph,turbidity,level,lat,lng
2,Ho Chi Minh City,180,6.8,4.5,moderate,10.8231,106.6297
1,Hanoi,120,7.2,2.3,good,21.0285,105.8542
";
    const FORECAST: &str = "day,tds,ph,turbidity\nMon,120,7.2,2.3\nTue,125,7.1,2.5\n";

    #[test]
    fn fixtures_load_into_one_database() {
        let mut data = FixtureData::load(REGIONS, FORECAST).unwrap();
        let ids: Vec<u32> = data.regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(data.forecast.len(), 2);
        assert_eq!(data.readings.len().unwrap(), 0);

        data.readings.record("140", Utc::now()).unwrap();
        assert_eq!(data.readings.store().query_regions().unwrap().len(), 2);
        assert_eq!(data.readings.len().unwrap(), 1);
    }

    #[test]
    fn bad_fixture_is_an_error() {
        let broken = "id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,120,7.2,2.3,murky,21.0,105.8\n";
        assert!(FixtureData::load(broken, FORECAST).is_err());
    }
}
