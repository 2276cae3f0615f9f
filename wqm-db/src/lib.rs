//! In-memory SQLite database layer for the SafeDrop dashboard.
//!
//! The fixtures (regions and the 7-day forecast) are embedded by the apps
//! with `include_str!` and loaded here on mount. Device readings entered in
//! the session are stored in the same database through the
//! [`ReadingStore`](wqm_core::reading::ReadingStore) implementation.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Typed query methods returning `wqm-core` structs
//!
//! # Usage
//!
//! ```rust
//! use wqm_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_regions("id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,120,7.2,2.3,good,21.0285,105.8542\n").unwrap();
//! let regions = db.query_regions().unwrap();
//! assert_eq!(regions[0].name, "Hanoi");
//! ```

pub mod schema;
mod loader;
mod queries;
mod readings;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;
use wqm_core::reading::MAX_READINGS;

/// In-memory SQLite database holding regions, forecast and device readings.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
    reading_capacity: usize,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_reading_capacity(MAX_READINGS)
    }

    /// Same as [`Database::new`] but keeping `capacity` device readings.
    pub fn with_reading_capacity(capacity: usize) -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
            reading_capacity: capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_regions(
            "id,name,tds,ph,turbidity,level,lat,lng\n1,Hanoi,120,7.2,2.3,good,21.0285,105.8542\n",
        )
        .unwrap();
        let regions = db2.query_regions().unwrap();
        assert_eq!(regions.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_regions().unwrap().is_empty());
        assert!(db.query_forecast().unwrap().is_empty());
    }
}
