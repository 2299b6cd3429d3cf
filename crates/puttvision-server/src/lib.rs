//! # PuttVision Server
//!
//! Boundary surfaces around the [`puttvision_core`] engine:
//!
//! - a read-only REST API serving putt snapshots ([`api`]),
//! - a per-tick UDP JSON telemetry sender ([`telemetry`]),
//! - the single-producer frame pipeline ([`pipeline`]),
//! - a simulated detection source for running without a camera
//!   ([`simulate`]).
//!
//! Boundary failures (telemetry send, listener bind) are retried or logged
//! and never stall or corrupt the producer's tick cadence.

pub mod api;
pub mod pipeline;
pub mod simulate;
pub mod telemetry;
