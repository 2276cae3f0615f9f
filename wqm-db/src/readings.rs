//! SQLite-backed store for hand-entered device readings.

use crate::Database;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::params;
use wqm_core::error::{Result, WqmError};
use wqm_core::reading::{DeviceReading, ReadingStore};

fn storage(e: impl std::fmt::Display) -> WqmError {
    WqmError::Storage(e.to_string())
}

impl ReadingStore for Database {
    fn append(&mut self, reading: DeviceReading) -> Result<()> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO device_readings (id, tds, captured_at) VALUES (?1, ?2, ?3)",
            params![
                reading.id,
                reading.tds,
                reading.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            ],
        )
        .map_err(storage)?;
        let dropped = conn
            .execute(
                "DELETE FROM device_readings WHERE seq NOT IN (
                    SELECT seq FROM device_readings ORDER BY seq DESC LIMIT ?1
                 )",
                params![self.reading_capacity as i64],
            )
            .map_err(storage)?;
        if dropped > 0 {
            log::debug!("readings: dropped {} oldest", dropped);
        }
        Ok(())
    }

    fn recent(&self) -> Result<Vec<DeviceReading>> {
        let conn = self.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT id, tds, captured_at FROM device_readings ORDER BY seq")
            .map_err(storage)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(storage)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(storage)?;

        rows.into_iter()
            .map(|(id, tds, captured_at)| {
                let timestamp = DateTime::parse_from_rfc3339(&captured_at)
                    .map_err(storage)?
                    .with_timezone(&Utc);
                Ok(DeviceReading { id, tds, timestamp })
            })
            .collect()
    }

    fn len(&self) -> Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM device_readings", [], |row| row.get(0))
            .map_err(storage)?;
        Ok(count as usize)
    }

    fn capacity(&self) -> usize {
        self.reading_capacity
    }
}
