//! Putt lifecycle: a 3-state machine over the ball track.
//!
//! Consumes the smoothed ball track once per frame tick, detects the start
//! and stop of individual putts via speed thresholds, derives per-putt
//! metrics (distance, break, timing), and appends completed putts to an
//! in-memory history.

mod engine;
mod record;

pub use engine::PuttEngine;
pub use record::{PuttRecord, PuttState, SessionSummary};
