//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// - `regions` - monitored regions with their latest measurements
/// - `forecast` - the 7-day forecast, `position` keeps day order
/// - `device_readings` - hand-entered TDS readings, `seq` keeps insertion order
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS regions (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        tds REAL NOT NULL,
        ph REAL NOT NULL,
        turbidity REAL NOT NULL,
        level TEXT NOT NULL,
        lat REAL NOT NULL,
        lng REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_regions_level ON regions(level);

    CREATE TABLE IF NOT EXISTS forecast (
        position INTEGER PRIMARY KEY,
        day TEXT NOT NULL,
        tds REAL NOT NULL,
        ph REAL NOT NULL,
        turbidity REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS device_readings (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL,
        tds REAL NOT NULL,
        captured_at TEXT NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in &["regions", "forecast", "device_readings"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
