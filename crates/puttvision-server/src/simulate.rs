//! Simulated detection source.
//!
//! Emits synthetic ball and putter detections on a fixed tick cadence so
//! the full pipeline, API, and telemetry path can run without a camera.
//! The ball cycles through address, stroke, and rest phases forever; every
//! detection carries positional jitter and occasional dropouts to exercise
//! the tracker's smoothing and coasting paths.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;

use puttvision_core::{BoundingBox, Detection, ObjectClass};

use crate::pipeline::Frame;

const BALL_RADIUS: f32 = 6.0;
const PUTTER_HALF_WIDTH: f32 = 20.0;
const JITTER: f32 = 1.5;
/// Per-tick fraction of ball velocity retained while rolling.
const FRICTION: f32 = 0.97;
/// Probability that a tick produces no ball detection.
const DROPOUT_RATE: f64 = 0.03;

enum Phase {
    /// Ball at rest, putter hovering behind it.
    Address { ticks_left: u32 },
    /// Ball rolling out after the stroke.
    Rolling,
    /// Ball stopped, waiting before the next address.
    Resting { ticks_left: u32 },
}

struct SimState {
    phase: Phase,
    ball_pos: (f32, f32),
    ball_vel: (f32, f32),
    rng: StdRng,
}

impl SimState {
    fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Address { ticks_left: 45 },
            ball_pos: (120.0, 360.0),
            ball_vel: (0.0, 0.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn step(&mut self, dt: f32) -> Vec<Detection> {
        match self.phase {
            Phase::Address { ticks_left } => {
                if ticks_left == 0 {
                    // Stroke impulse with a slight lateral component so the
                    // putt shows measurable break.
                    let speed = self.rng.gen_range(250.0..400.0);
                    let lateral = self.rng.gen_range(-30.0..30.0);
                    self.ball_vel = (speed, lateral);
                    self.phase = Phase::Rolling;
                } else {
                    self.phase = Phase::Address {
                        ticks_left: ticks_left - 1,
                    };
                }
            }
            Phase::Rolling => {
                self.ball_pos.0 += self.ball_vel.0 * dt;
                self.ball_pos.1 += self.ball_vel.1 * dt;
                self.ball_vel.0 *= FRICTION;
                self.ball_vel.1 *= FRICTION;

                let speed = (self.ball_vel.0 * self.ball_vel.0
                    + self.ball_vel.1 * self.ball_vel.1)
                    .sqrt();
                if speed < 2.0 {
                    self.ball_vel = (0.0, 0.0);
                    self.phase = Phase::Resting { ticks_left: 60 };
                    tracing::debug!(
                        x = self.ball_pos.0,
                        y = self.ball_pos.1,
                        "simulated ball at rest"
                    );
                }
            }
            Phase::Resting { ticks_left } => {
                if ticks_left == 0 {
                    // Tee the ball back up for the next putt.
                    self.ball_pos = (120.0, self.rng.gen_range(300.0..420.0));
                    self.phase = Phase::Address { ticks_left: 45 };
                } else {
                    self.phase = Phase::Resting {
                        ticks_left: ticks_left - 1,
                    };
                }
            }
        }

        let mut detections = Vec::with_capacity(2);
        if self.rng.gen_bool(1.0 - DROPOUT_RATE) {
            detections.push(self.jittered(ObjectClass::Ball, self.ball_pos, BALL_RADIUS));
        }
        if matches!(self.phase, Phase::Address { .. }) {
            let putter_pos = (self.ball_pos.0 - 35.0, self.ball_pos.1);
            detections.push(self.jittered(ObjectClass::Putter, putter_pos, PUTTER_HALF_WIDTH));
        }
        detections
    }

    fn jittered(&mut self, class: ObjectClass, center: (f32, f32), half: f32) -> Detection {
        let cx = center.0 + self.rng.gen_range(-JITTER..JITTER);
        let cy = center.1 + self.rng.gen_range(-JITTER..JITTER);
        Detection {
            class,
            confidence: self.rng.gen_range(0.82..0.97),
            bbox: BoundingBox {
                x1: cx - half,
                y1: cy - half,
                x2: cx + half,
                y2: cy + half,
            },
        }
    }
}

/// Produce simulated frames on a fixed cadence until the receiver is gone.
pub async fn run(frames: mpsc::Sender<Frame>, tick_ms: u64, seed: u64) {
    let dt = tick_ms as f64 / 1000.0;
    let mut state = SimState::new(seed);
    let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
    tracing::info!(tick_ms, seed, "simulator started");

    loop {
        interval.tick().await;
        let detections = state.step(dt as f32);
        if frames.send(Frame { detections, dt }).await.is_err() {
            tracing::info!("simulator stopping, pipeline gone");
            break;
        }
    }
}
