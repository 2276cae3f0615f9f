//! Heatmap rendering for the SafeDrop dashboard.
//!
//! All coordinates are on a fixed 1200×800 logical grid; the compositor
//! scales to whatever pixel size the canvas has.

pub mod color;
pub mod field;
pub mod layout;

pub use field::{HeatField, HeatSource};
pub use layout::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
