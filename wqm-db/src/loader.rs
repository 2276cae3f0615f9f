//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! # CSV Formats
//!
//! - **Regions** (has headers): `id,name,tds,ph,turbidity,level,lat,lng`
//! - **Forecast** (has headers): `day,tds,ph,turbidity`

use crate::Database;
use rusqlite::params;
use wqm_core::forecast::ForecastPoint;
use wqm_core::region::Region;

impl Database {
    /// Load region rows from a CSV string, replacing rows with the same id.
    pub fn load_regions(&self, csv_data: &str) -> anyhow::Result<()> {
        let regions = Region::parse_region_csv(csv_data)?;
        let conn = self.conn.borrow();
        for r in &regions {
            conn.execute(
                "INSERT OR REPLACE INTO regions (id, name, tds, ph, turbidity, level, lat, lng)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    r.id,
                    r.name,
                    r.tds,
                    r.ph,
                    r.turbidity,
                    r.level.key(),
                    r.coordinates.lat,
                    r.coordinates.lng
                ],
            )?;
        }
        log::info!("loader: Loaded {} regions", regions.len());
        Ok(())
    }

    /// Load the forecast from a CSV string, replacing any previous forecast.
    pub fn load_forecast(&self, csv_data: &str) -> anyhow::Result<()> {
        let points = ForecastPoint::parse_forecast_csv(csv_data)?;
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM forecast", [])?;
        for (position, p) in points.iter().enumerate() {
            conn.execute(
                "INSERT INTO forecast (position, day, tds, ph, turbidity)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![position as i64, p.day, p.tds, p.ph, p.turbidity],
            )?;
        }
        log::info!("loader: Loaded {} forecast days", points.len());
        Ok(())
    }
}
