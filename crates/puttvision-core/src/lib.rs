//! # PuttVision Core
//!
//! Real-time tracking and putt-lifecycle engine for camera-based putting
//! analysis.
//!
//! The crate turns a noisy stream of per-frame object detections (ball and
//! putter bounding boxes with confidence scores) into smoothed kinematic
//! state, detects the start and stop of individual putts, and accumulates
//! per-putt and per-session metrics. All mutable state is published through
//! a single-writer/multi-reader snapshot store so that network senders and
//! API handlers can read a consistent view while the producer loop keeps
//! updating tens of times per second.
//!
//! ## Architecture
//!
//! ```text
//! detections ──► Tracker ──► PuttEngine ──► StatsStore ──► snapshots
//!   (per tick)    (EMA smoothing,  (3-state putt   (RwLock, copy-out
//!                  coasting)        machine)         reads)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use puttvision_core::{
//!     BoundingBox, Detection, EngineConfig, ObjectClass, StatsStore, Tracker,
//! };
//!
//! let config = EngineConfig::default();
//! let mut tracker = Tracker::new(&config);
//! let stats = StatsStore::new(&config);
//!
//! let detections = vec![Detection::new(
//!     ObjectClass::Ball,
//!     0.9,
//!     BoundingBox::new(100.0, 200.0, 110.0, 210.0),
//! )];
//!
//! tracker.update(&detections, 1.0 / 30.0);
//! stats.update(tracker.ball(), tracker.putter(), 1.0 / 30.0);
//!
//! let snapshot = stats.snapshot_current();
//! assert!(snapshot.ball.valid);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detection;
pub mod putt;
pub mod stats;
pub mod tracking;

pub use config::{ConfigError, EngineConfig, EngineConfigBuilder};
pub use detection::{BoundingBox, Detection, ObjectClass};
pub use putt::{PuttEngine, PuttRecord, PuttState, SessionSummary};
pub use stats::{StatsStore, TickSnapshot};
pub use tracking::{TrackedObject, Tracker};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
