//! Device TDS readings entered by hand from a handheld meter.
//!
//! Readings live in a session-scoped [`ReadingLog`] that owns an injected
//! [`ReadingStore`]. The log validates input, stamps the reading, and keeps
//! at most [`MAX_READINGS`] entries (oldest evicted first).

use crate::error::Result;
use crate::quality::QualityLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Most readings kept per session.
pub const MAX_READINGS: usize = 10;
/// Readings shown in the "recent readings" grid.
pub const RECENT_DISPLAY: usize = 6;
/// Accepted TDS range in mg/L (inclusive).
pub const TDS_MIN: f64 = 0.0;
pub const TDS_MAX: f64 = 1000.0;

/// Message shown under the input when the value is rejected.
pub const RANGE_HINT: &str = "Vui lòng nhập giá trị từ 0-1000 mg/L";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingError {
    #[error("no TDS value entered")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("TDS {0} mg/L is outside 0-1000")]
    OutOfRange(f64),
}

/// A single stored reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReading {
    pub id: String,
    pub tds: f64,
    pub timestamp: DateTime<Utc>,
}

impl DeviceReading {
    pub fn level(&self) -> QualityLevel {
        QualityLevel::from_tds(self.tds)
    }
}

/// Parse and range-check a TDS value typed into the device form.
pub fn parse_tds(input: &str) -> std::result::Result<f64, ReadingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReadingError::Empty);
    }
    let tds: f64 = trimmed
        .parse()
        .map_err(|_| ReadingError::NotNumeric(trimmed.to_string()))?;
    if !tds.is_finite() {
        return Err(ReadingError::NotNumeric(trimmed.to_string()));
    }
    if !(TDS_MIN..=TDS_MAX).contains(&tds) {
        return Err(ReadingError::OutOfRange(tds));
    }
    Ok(tds)
}

/// Live feedback for the TDS input while the user types.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValidation {
    /// Nothing typed yet; no message.
    Blank,
    /// Rejected; submission is disabled.
    Invalid(&'static str),
    /// Accepted; carries the tier the value would be stored as.
    Valid(QualityLevel),
}

impl InputValidation {
    pub fn message(&self) -> &'static str {
        match self {
            InputValidation::Blank => "",
            InputValidation::Invalid(msg) => msg,
            InputValidation::Valid(level) => level.reading_label(),
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, InputValidation::Valid(_))
    }
}

pub fn validate_input(input: &str) -> InputValidation {
    match parse_tds(input) {
        Ok(tds) => InputValidation::Valid(QualityLevel::from_tds(tds)),
        Err(ReadingError::Empty) => InputValidation::Blank,
        Err(_) => InputValidation::Invalid(RANGE_HINT),
    }
}

/// Backing store for a reading log.
///
/// Implementations must keep at most `capacity()` readings and drop the
/// oldest first.
pub trait ReadingStore {
    fn append(&mut self, reading: DeviceReading) -> Result<()>;
    /// All stored readings, oldest first.
    fn recent(&self) -> Result<Vec<DeviceReading>>;
    fn len(&self) -> Result<usize>;
    fn capacity(&self) -> usize;
}

/// Plain in-memory store.
#[derive(Debug, Clone)]
pub struct MemoryReadingStore {
    readings: VecDeque<DeviceReading>,
    capacity: usize,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_READINGS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
}

impl Default for MemoryReadingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingStore for MemoryReadingStore {
    fn append(&mut self, reading: DeviceReading) -> Result<()> {
        self.readings.push_back(reading);
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
        Ok(())
    }

    fn recent(&self) -> Result<Vec<DeviceReading>> {
        Ok(self.readings.iter().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.readings.len())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Why a submission did not produce a reading.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Invalid(#[from] ReadingError),
    #[error(transparent)]
    Store(#[from] crate::error::WqmError),
}

/// Session-scoped reading log over an injected store.
#[derive(Debug, Clone)]
pub struct ReadingLog<S: ReadingStore> {
    store: S,
    last_id: Option<(i64, u32)>,
}

impl<S: ReadingStore> ReadingLog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_id: None,
        }
    }

    /// Validate `input` and append it as a reading captured at `now`.
    ///
    /// Nothing is stored when validation fails.
    pub fn record(
        &mut self,
        input: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<DeviceReading, RecordError> {
        let tds = parse_tds(input)?;
        let reading = DeviceReading {
            id: self.next_id(now),
            tds,
            timestamp: now,
        };
        self.store.append(reading.clone())?;
        log::info!("TDS reading saved: {} mg/L ({})", tds, reading.id);
        Ok(reading)
    }

    /// Stored readings, oldest first.
    pub fn readings(&self) -> Result<Vec<DeviceReading>> {
        self.store.recent()
    }

    /// Up to `n` readings, newest first.
    pub fn latest(&self, n: usize) -> Result<Vec<DeviceReading>> {
        let mut readings = self.store.recent()?;
        readings.reverse();
        readings.truncate(n);
        Ok(readings)
    }

    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.len()? == 0)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ids are the capture time in epoch milliseconds; a suffix keeps two
    /// readings captured in the same millisecond distinct.
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let seq = match self.last_id {
            Some((last, seq)) if last == millis => seq + 1,
            _ => 0,
        };
        self.last_id = Some((millis, seq));
        if seq == 0 {
            millis.to_string()
        } else {
            format!("{}-{}", millis, seq)
        }
    }
}
