//! Core types for the SafeDrop water quality dashboard.
//!
//! Everything here is plain data and pure functions so it can be shared by
//! the Dioxus front-end and unit tested natively.

pub mod chat;
pub mod error;
pub mod forecast;
pub mod quality;
pub mod reading;
pub mod region;
pub mod stats;
pub mod table;
