//! AquaBot, the dashboard's canned water-quality assistant.
//!
//! - `responder`: the [`Responder`](responder::Responder) request/response
//!   seam and its keyword-table implementation
//! - `insights`: fixed insight lists and the periodic auto-insight generator
//! - `session`: per-panel chat state (transcript, typing, auto-analysis)

pub mod insights;
pub mod responder;
pub mod session;
