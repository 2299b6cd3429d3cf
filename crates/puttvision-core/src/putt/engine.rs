//! The putt lifecycle state machine.

use crate::config::EngineConfig;
use crate::tracking::TrackedObject;

use super::record::{PuttRecord, PuttState, SessionSummary};

/// Minimum velocity magnitude for capturing a break reference direction.
const DIRECTION_EPSILON: f32 = 1e-6;

/// Drives the `Idle → InMotion → Stopped` machine from the ball track.
///
/// Purely single-threaded: the engine is owned by the stats store and
/// stepped exactly once per producer tick under its write lock. History is
/// append-only; the only write path is finalization on the
/// `InMotion → Stopped` transition.
pub struct PuttEngine {
    motion_threshold: f32,
    stop_frames_required: u32,

    current: PuttRecord,
    history: Vec<PuttRecord>,

    /// Consecutive below-threshold ticks while in motion.
    frames_below_threshold: u32,
    /// Ball position on the previous tick, cleared whenever the track is
    /// invalid so a reacquired ball cannot produce a phantom distance jump.
    prev_pos: Option<(f32, f32)>,
    /// Unit direction captured at motion entry, reference line for break.
    /// `None` when velocity was ~zero at that instant; break accumulation
    /// is skipped for the whole putt in that case.
    direction: Option<(f32, f32)>,
}

impl PuttEngine {
    /// Create an engine from the engine configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            motion_threshold: config.motion_threshold,
            stop_frames_required: config.stop_frames_required,
            current: PuttRecord::default(),
            history: Vec::new(),
            frames_below_threshold: 0,
            prev_pos: None,
            direction: None,
        }
    }

    /// Advance the machine by one tick of the ball track.
    ///
    /// A tick with an invalid ball track transitions nothing and clears the
    /// previous-position sample. A tick with `dt <= 0` runs state
    /// transitions but suppresses metric accumulation.
    pub fn update(&mut self, ball: &TrackedObject, dt: f64) {
        if !ball.valid {
            self.prev_pos = None;
            return;
        }

        let speed = ball.speed();
        self.current.current_speed = speed;

        if let Some(prev) = self.prev_pos {
            if self.current.state == PuttState::InMotion && dt > 0.0 {
                let dx = ball.position.0 - prev.0;
                let dy = ball.position.1 - prev.1;
                self.current.total_distance += (dx * dx + dy * dy).sqrt();
                self.current.time_in_motion += dt as f32;

                if speed > self.current.peak_speed {
                    self.current.peak_speed = speed;
                }

                if let Some((dir_x, dir_y)) = self.direction {
                    // Perpendicular distance from the initial putt line:
                    // cross product of start→current with the unit direction.
                    let rx = ball.position.0 - self.current.start.0;
                    let ry = ball.position.1 - self.current.start.1;
                    let deviation = (rx * dir_y - ry * dir_x).abs();
                    if deviation > self.current.break_distance {
                        self.current.break_distance = deviation;
                    }
                }

                self.current.final_pos = ball.position;
            }
        }

        self.prev_pos = Some(ball.position);

        match self.current.state {
            PuttState::Idle | PuttState::Stopped => {
                if speed > self.motion_threshold {
                    self.begin_putt(ball, speed);
                }
            }
            PuttState::InMotion => {
                if speed < self.motion_threshold {
                    self.frames_below_threshold += 1;
                    if self.frames_below_threshold >= self.stop_frames_required {
                        self.current.state = PuttState::Stopped;
                        self.finalize_putt();
                    }
                } else {
                    self.frames_below_threshold = 0;
                }
            }
        }
    }

    /// The in-progress or most recently finalized putt.
    #[must_use]
    pub fn current(&self) -> &PuttRecord {
        &self.current
    }

    /// Finalized putts in completion order.
    #[must_use]
    pub fn history(&self) -> &[PuttRecord] {
        &self.history
    }

    /// Session summary over the finalized history, computed on demand.
    #[must_use]
    pub fn session(&self) -> SessionSummary {
        SessionSummary::from_history(&self.history)
    }

    /// Start a fresh putt; entry logic is identical from Idle and Stopped.
    fn begin_putt(&mut self, ball: &TrackedObject, speed: f32) {
        self.current.state = PuttState::InMotion;
        self.current.number = self.history.len() as u32 + 1;
        self.current.launch_speed = speed;
        self.current.peak_speed = speed;
        self.current.total_distance = 0.0;
        self.current.break_distance = 0.0;
        self.current.time_in_motion = 0.0;
        self.current.start = ball.position;
        self.current.final_pos = ball.position;

        self.direction = if speed > DIRECTION_EPSILON {
            Some((ball.velocity.0 / speed, ball.velocity.1 / speed))
        } else {
            None
        };
        self.frames_below_threshold = 0;

        tracing::debug!(
            putt = self.current.number,
            launch_speed = speed,
            "putt started"
        );
    }

    fn finalize_putt(&mut self) {
        self.history.push(self.current);
        tracing::debug!(
            putt = self.current.number,
            total_distance = self.current.total_distance,
            break_distance = self.current.break_distance,
            time_in_motion = self.current.time_in_motion,
            "putt finished"
        );
    }
}
