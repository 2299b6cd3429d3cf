//! Smoothed kinematic state for a single tracked object.

use serde::{Deserialize, Serialize};

use crate::detection::ObjectClass;

/// Velocity decay applied per coasting tick.
const COAST_DECAY: f32 = 0.9;

/// Minimum dt (seconds) below which velocity estimation is skipped.
const DT_EPSILON: f64 = 1e-6;

/// Smoothed state for one tracked object.
///
/// Mutated only by the [`Tracker`](super::Tracker) on each tick; consumers
/// receive copies. Invariant: `valid == false` implies `velocity == (0, 0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrackedObject {
    /// Semantic class this track follows.
    pub class: ObjectClass,
    /// Smoothed center position in pixels.
    pub position: (f32, f32),
    /// Estimated velocity in px/s.
    pub velocity: (f32, f32),
    /// Confidence of the most recent matched detection.
    pub confidence: f32,
    /// Frames elapsed since the last matched detection.
    pub frames_since_seen: u32,
    /// Whether the track currently holds a trustworthy state. Consumers
    /// must check this before using position or velocity.
    pub valid: bool,
}

impl TrackedObject {
    /// Creates an empty, invalid track for the given class.
    #[must_use]
    pub fn new(class: ObjectClass) -> Self {
        Self {
            class,
            position: (0.0, 0.0),
            velocity: (0.0, 0.0),
            confidence: 0.0,
            frames_since_seen: 0,
            valid: false,
        }
    }

    /// Current speed, `|velocity|` in px/s.
    #[must_use]
    pub fn speed(&self) -> f32 {
        let (vx, vy) = self.velocity;
        (vx * vx + vy * vy).sqrt()
    }

    /// Feed a matched observation into the track.
    ///
    /// An invalid track snaps exactly to the observed center with zero
    /// velocity. A valid track blends position via EMA and re-estimates
    /// velocity from the smoothed position delta, smoothed with the same
    /// factor so the two stay consistent. Velocity estimation is skipped
    /// when `dt` is too small to divide by safely.
    pub(super) fn observe(&mut self, center: (f32, f32), confidence: f32, alpha: f32, dt: f64) {
        if !self.valid {
            self.position = center;
            self.velocity = (0.0, 0.0);
        } else {
            let prev = self.position;
            self.position = (
                alpha * center.0 + (1.0 - alpha) * self.position.0,
                alpha * center.1 + (1.0 - alpha) * self.position.1,
            );

            if dt > DT_EPSILON {
                let inst_vx = (self.position.0 - prev.0) / dt as f32;
                let inst_vy = (self.position.1 - prev.1) / dt as f32;
                self.velocity = (
                    alpha * inst_vx + (1.0 - alpha) * self.velocity.0,
                    alpha * inst_vy + (1.0 - alpha) * self.velocity.1,
                );
            }
        }

        self.confidence = confidence;
        self.frames_since_seen = 0;
        self.valid = true;
    }

    /// Register a tick with no matched observation.
    ///
    /// While still within `max_lost`, the track coasts: position advances
    /// along the last velocity and the velocity decays each tick, modelling
    /// a ball still rolling under intermittent occlusion without unbounded
    /// drift. Past `max_lost` the track is lost outright.
    pub(super) fn miss(&mut self, max_lost: u32, dt: f64) {
        self.frames_since_seen += 1;
        if self.frames_since_seen > max_lost {
            if self.valid {
                tracing::debug!(class = %self.class, "track lost");
            }
            self.valid = false;
            self.velocity = (0.0, 0.0);
        } else if self.valid {
            self.position.0 += self.velocity.0 * dt as f32;
            self.position.1 += self.velocity.1 * dt as f32;
            self.velocity.0 *= COAST_DECAY;
            self.velocity.1 *= COAST_DECAY;
        }
    }
}
