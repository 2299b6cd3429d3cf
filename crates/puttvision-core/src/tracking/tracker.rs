//! Per-frame tracker maintaining one smoothed track per semantic class.

use crate::config::EngineConfig;
use crate::detection::{Detection, ObjectClass};

use super::track::TrackedObject;

/// Maintains the ball and putter tracks across frame ticks.
///
/// `update` is the sole mutator and is driven by the single producer loop;
/// all inputs are accepted, there is no error path.
pub struct Tracker {
    alpha: f32,
    max_lost: u32,
    ball: TrackedObject,
    putter: TrackedObject,
}

impl Tracker {
    /// Create a tracker from the engine configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            alpha: config.alpha,
            max_lost: config.max_lost,
            ball: TrackedObject::new(ObjectClass::Ball),
            putter: TrackedObject::new(ObjectClass::Putter),
        }
    }

    /// Feed the detections of the current frame.
    ///
    /// For each class independently the highest-confidence detection is
    /// selected (ties: first encountered); absence of a detection of a
    /// class counts as a miss for that track. `dt` is the elapsed time in
    /// seconds since the previous tick.
    pub fn update(&mut self, detections: &[Detection], dt: f64) {
        let best_ball = best_of_class(detections, ObjectClass::Ball);
        let best_putter = best_of_class(detections, ObjectClass::Putter);

        update_track(&mut self.ball, best_ball, self.alpha, self.max_lost, dt);
        update_track(&mut self.putter, best_putter, self.alpha, self.max_lost, dt);
    }

    /// Current smoothed ball state.
    #[must_use]
    pub fn ball(&self) -> &TrackedObject {
        &self.ball
    }

    /// Current smoothed putter state.
    #[must_use]
    pub fn putter(&self) -> &TrackedObject {
        &self.putter
    }

    /// True when the ball track is active.
    #[must_use]
    pub fn ball_visible(&self) -> bool {
        self.ball.valid
    }

    /// True when the putter track is active.
    #[must_use]
    pub fn putter_visible(&self) -> bool {
        self.putter.valid
    }
}

/// Highest-confidence detection of a class; first encountered wins ties.
fn best_of_class(detections: &[Detection], class: ObjectClass) -> Option<&Detection> {
    let mut best: Option<&Detection> = None;
    for det in detections.iter().filter(|d| d.class == class) {
        match best {
            Some(b) if det.confidence <= b.confidence => {}
            _ => best = Some(det),
        }
    }
    best
}

fn update_track(
    track: &mut TrackedObject,
    det: Option<&Detection>,
    alpha: f32,
    max_lost: u32,
    dt: f64,
) {
    match det {
        Some(det) => track.observe(det.bbox.center(), det.confidence, alpha, dt),
        None => track.miss(max_lost, dt),
    }
}
