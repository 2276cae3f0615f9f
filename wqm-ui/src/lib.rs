//! Shared Dioxus components and browser bridge for the SafeDrop dashboards.
//!
//! This crate provides:
//! - `config`: site name and UI timing constants
//! - `js_bridge`: D3.js forecast chart via `js_sys::eval()` and the heatmap canvas blit
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (heatmap, table, chat panel, etc.)

pub mod config;
pub mod js_bridge;
pub mod state;
pub mod components;
