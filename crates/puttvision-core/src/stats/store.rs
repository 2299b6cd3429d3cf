//! Single-writer/multi-reader store publishing atomic snapshots.
//!
//! The producer loop is the sole mutator; any number of reader contexts
//! (telemetry sender, API handlers) take point-in-time copies concurrently.
//! The write lock is held only for one state-machine step and the read lock
//! only for one copy; no lock is ever held across I/O: callers copy out
//! first and release before sending or serializing.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::detection::ObjectClass;
use crate::putt::{PuttEngine, PuttRecord, SessionSummary};
use crate::tracking::TrackedObject;

/// Atomically captured copy of the engine state for one tick.
///
/// Internally consistent: every field reflects exactly one completed
/// update, never a mix of two ticks. The `tick` counter is monotonic and
/// bumps once per producer update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TickSnapshot {
    /// Monotonic tick counter, one increment per producer update.
    pub tick: u64,
    /// Wall-clock time of the update.
    pub timestamp: DateTime<Utc>,
    /// Smoothed ball track.
    pub ball: TrackedObject,
    /// Smoothed putter track.
    pub putter: TrackedObject,
    /// In-progress or most recently finalized putt.
    pub putt: PuttRecord,
}

struct Inner {
    engine: PuttEngine,
    ball: TrackedObject,
    putter: TrackedObject,
    tick: u64,
    timestamp: DateTime<Utc>,
}

/// Guards the lifecycle engine and the latest track copies behind a single
/// exclusive lock, exposing copy-out snapshot reads.
pub struct StatsStore {
    inner: RwLock<Inner>,
}

impl StatsStore {
    /// Create a store with a fresh engine and empty tracks.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            inner: RwLock::new(Inner {
                engine: PuttEngine::new(config),
                ball: TrackedObject::new(ObjectClass::Ball),
                putter: TrackedObject::new(ObjectClass::Putter),
                tick: 0,
                timestamp: Utc::now(),
            }),
        }
    }

    /// Sole mutator, invoked by the single producer once per frame tick.
    ///
    /// Steps the putt engine with the ball track, stores copies of both
    /// tracks, and bumps the tick counter, all under one write lock so
    /// readers can never observe a partial update.
    pub fn update(&self, ball: &TrackedObject, putter: &TrackedObject, dt: f64) {
        let mut inner = self.inner.write();
        inner.engine.update(ball, dt);
        inner.ball = *ball;
        inner.putter = *putter;
        inner.tick += 1;
        inner.timestamp = Utc::now();
    }

    /// Copy of the current tick's tracks and putt record.
    #[must_use]
    pub fn snapshot_current(&self) -> TickSnapshot {
        let inner = self.inner.read();
        TickSnapshot {
            tick: inner.tick,
            timestamp: inner.timestamp,
            ball: inner.ball,
            putter: inner.putter,
            putt: *inner.engine.current(),
        }
    }

    /// Copy of the finalized putt history, oldest first.
    #[must_use]
    pub fn snapshot_history(&self) -> Vec<PuttRecord> {
        self.inner.read().engine.history().to_vec()
    }

    /// Session summary over the finalized history.
    #[must_use]
    pub fn snapshot_session(&self) -> SessionSummary {
        self.inner.read().engine.session()
    }

    /// Number of completed producer updates.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.inner.read().tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn ball_at(tick: u64) -> TrackedObject {
        // Encode the tick into every kinematic field so a torn read is
        // detectable as a cross-field inconsistency. Kept small enough that
        // the multiples below stay exactly representable in f32.
        let k = (tick % 100_000) as f32;
        TrackedObject {
            class: ObjectClass::Ball,
            position: (k, 2.0 * k),
            velocity: (3.0 * k, 4.0 * k),
            confidence: 0.5,
            frames_since_seen: 0,
            valid: true,
        }
    }

    #[test]
    fn test_update_bumps_tick() {
        let store = StatsStore::new(&EngineConfig::default());
        assert_eq!(store.tick(), 0);

        let ball = TrackedObject::new(ObjectClass::Ball);
        let putter = TrackedObject::new(ObjectClass::Putter);
        store.update(&ball, &putter, 1.0 / 30.0);
        store.update(&ball, &putter, 1.0 / 30.0);
        assert_eq!(store.tick(), 2);
        assert_eq!(store.snapshot_current().tick, 2);
    }

    #[test]
    fn test_snapshot_reflects_latest_update() {
        let store = StatsStore::new(&EngineConfig::default());
        let putter = TrackedObject::new(ObjectClass::Putter);

        store.update(&ball_at(7), &putter, 1.0 / 30.0);
        let snap = store.snapshot_current();
        assert_eq!(snap.ball.position, (7.0, 14.0));
        assert!(!snap.putter.valid);
    }

    #[test]
    fn test_empty_history_snapshot() {
        let store = StatsStore::new(&EngineConfig::default());
        assert!(store.snapshot_history().is_empty());
        let session = store.snapshot_session();
        assert_eq!(session.total_putts, 0);
        assert_eq!(session.avg_launch_speed, 0.0);
    }

    #[test]
    fn test_snapshots_are_never_torn() {
        let store = Arc::new(StatsStore::new(&EngineConfig::default()));
        let stop = Arc::new(AtomicBool::new(false));

        // Producer: continuous updates encoding the tick into every field.
        let producer = {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                let putter = TrackedObject::new(ObjectClass::Putter);
                let mut tick = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    tick += 1;
                    store.update(&ball_at(tick), &putter, 1.0 / 120.0);
                }
                tick
            })
        };

        // Readers: every snapshot must be internally consistent.
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let stop = Arc::clone(&stop);
                std::thread::spawn(move || {
                    let mut last_tick = 0u64;
                    while !stop.load(Ordering::Relaxed) {
                        let snap = store.snapshot_current();
                        if snap.tick == 0 {
                            continue;
                        }
                        let k = snap.ball.position.0;
                        assert_eq!(snap.ball.position.1, 2.0 * k, "torn position");
                        assert_eq!(snap.ball.velocity.0, 3.0 * k, "torn velocity x");
                        assert_eq!(snap.ball.velocity.1, 4.0 * k, "torn velocity y");
                        assert!(snap.tick >= last_tick, "tick went backwards");
                        last_tick = snap.tick;
                    }
                })
            })
            .collect();

        std::thread::sleep(std::time::Duration::from_millis(200));
        stop.store(true, Ordering::Relaxed);

        let produced = producer.join().unwrap();
        assert!(produced > 0);
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
