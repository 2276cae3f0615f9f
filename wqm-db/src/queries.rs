//! Typed query methods for retrieving regions and forecast data.

use crate::Database;
use rusqlite::types::Type;
use rusqlite::Row;
use wqm_core::forecast::ForecastPoint;
use wqm_core::quality::QualityLevel;
use wqm_core::region::{Coordinates, Region};

fn region_from_row(row: &Row<'_>) -> rusqlite::Result<Region> {
    let level_key: String = row.get(5)?;
    let level = level_key
        .parse::<QualityLevel>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;
    Ok(Region {
        id: row.get(0)?,
        name: row.get(1)?,
        tds: row.get(2)?,
        ph: row.get(3)?,
        turbidity: row.get(4)?,
        level,
        coordinates: Coordinates {
            lat: row.get(6)?,
            lng: row.get(7)?,
        },
    })
}

impl Database {
    /// All regions in fixture (id) order.
    pub fn query_regions(&self) -> anyhow::Result<Vec<Region>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, name, tds, ph, turbidity, level, lat, lng FROM regions ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], region_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_regions returned {} records", rows.len());
        Ok(rows)
    }

    /// The forecast in day order.
    pub fn query_forecast(&self) -> anyhow::Result<Vec<ForecastPoint>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT day, tds, ph, turbidity FROM forecast ORDER BY position")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ForecastPoint {
                    day: row.get(0)?,
                    tds: row.get(1)?,
                    ph: row.get(2)?,
                    turbidity: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_forecast returned {} records", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        db.load_regions(
            "\
id,name,tds,ph,turbidity,level,lat,lng
3,Da Nang,95,7.5,1.8,excellent,16.0544,108.2022
1,Hanoi,120,7.2,2.3,good,21.0285,105.8542
7,Hue,110,7.3,2.1,good,16.4637,107.5909
",
        )
        .unwrap();
        db.load_forecast("day,tds,ph,turbidity\nMon,120,7.2,2.3\nTue,125,7.1,2.5\nWed,118,7.3,2.1\n")
            .unwrap();
        db
    }

    #[test]
    fn query_regions_ordered_by_id() {
        let regions = sample_db().query_regions().unwrap();
        let ids: Vec<u32> = regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 7]);
        assert_eq!(regions[1].level, QualityLevel::Excellent);
        assert!((regions[0].coordinates.lng - 105.8542).abs() < 1e-9);
    }

    #[test]
    fn query_forecast_keeps_day_order() {
        let forecast = sample_db().query_forecast().unwrap();
        let days: Vec<&str> = forecast.iter().map(|p| p.day.as_str()).collect();
        assert_eq!(days, vec!["Mon", "Tue", "Wed"]);
    }
}
