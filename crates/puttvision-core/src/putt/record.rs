//! Per-putt and per-session metric records.

use serde::{Deserialize, Serialize};

/// Lifecycle state of the current putt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuttState {
    /// Ball at rest, waiting for a stroke.
    Idle,
    /// Ball rolling; metrics accumulate every tick.
    InMotion,
    /// Ball came to rest; the putt has been finalized into history.
    Stopped,
}

impl PuttState {
    /// Wire tag for this state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InMotion => "in_motion",
            Self::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for PuttState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics for the in-progress or most recently finalized putt.
///
/// Invariants while `state == InMotion`: `peak_speed >= launch_speed`, and
/// `total_distance`, `break_distance`, `time_in_motion` are monotonically
/// non-decreasing. `number` is assigned as `history.len() + 1` at the
/// instant the putt enters `InMotion`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PuttRecord {
    /// 1-based putt number within the session; 0 until the first stroke.
    pub number: u32,
    /// Current lifecycle state.
    pub state: PuttState,
    /// Ball speed at the first in-motion tick (px/s).
    pub launch_speed: f32,
    /// Real-time ball speed (px/s).
    pub current_speed: f32,
    /// Maximum speed observed during the putt (px/s).
    pub peak_speed: f32,
    /// Cumulative path length (px).
    pub total_distance: f32,
    /// Maximum lateral deviation from the initial putt line (px).
    pub break_distance: f32,
    /// Seconds spent in motion.
    pub time_in_motion: f32,
    /// Ball position when the putt started (px).
    pub start: (f32, f32),
    /// Most recent ball position of the putt (px).
    #[serde(rename = "final")]
    pub final_pos: (f32, f32),
}

impl Default for PuttRecord {
    fn default() -> Self {
        Self {
            number: 0,
            state: PuttState::Idle,
            launch_speed: 0.0,
            current_speed: 0.0,
            peak_speed: 0.0,
            total_distance: 0.0,
            break_distance: 0.0,
            time_in_motion: 0.0,
            start: (0.0, 0.0),
            final_pos: (0.0, 0.0),
        }
    }
}

/// Arithmetic means over the finalized putt history.
///
/// Derived on demand, never cached; zero-valued when the history is empty.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Number of finalized putts.
    pub total_putts: u32,
    /// Mean launch speed (px/s).
    pub avg_launch_speed: f32,
    /// Mean cumulative path length (px).
    pub avg_total_distance: f32,
    /// Mean break distance (px).
    pub avg_break_distance: f32,
    /// Mean time in motion (s).
    pub avg_time_in_motion: f32,
}

impl SessionSummary {
    /// Compute the summary over a finalized history.
    #[must_use]
    pub fn from_history(history: &[PuttRecord]) -> Self {
        let total_putts = history.len() as u32;
        if total_putts == 0 {
            return Self::default();
        }

        let n = total_putts as f32;
        let mut summary = Self {
            total_putts,
            ..Self::default()
        };
        for putt in history {
            summary.avg_launch_speed += putt.launch_speed;
            summary.avg_total_distance += putt.total_distance;
            summary.avg_break_distance += putt.break_distance;
            summary.avg_time_in_motion += putt.time_in_motion;
        }
        summary.avg_launch_speed /= n;
        summary.avg_total_distance /= n;
        summary.avg_break_distance /= n;
        summary.avg_time_in_motion /= n;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tags() {
        assert_eq!(PuttState::Idle.as_str(), "idle");
        assert_eq!(PuttState::InMotion.as_str(), "in_motion");
        assert_eq!(PuttState::Stopped.as_str(), "stopped");
    }

    #[test]
    fn test_empty_history_yields_zero_summary() {
        let summary = SessionSummary::from_history(&[]);
        assert_eq!(summary.total_putts, 0);
        assert_eq!(summary.avg_launch_speed, 0.0);
        assert_eq!(summary.avg_total_distance, 0.0);
        assert_eq!(summary.avg_break_distance, 0.0);
        assert_eq!(summary.avg_time_in_motion, 0.0);
    }

    #[test]
    fn test_session_averages() {
        let mut a = PuttRecord::default();
        a.launch_speed = 10.0;
        a.total_distance = 100.0;
        let mut b = PuttRecord::default();
        b.launch_speed = 20.0;
        b.total_distance = 300.0;

        let summary = SessionSummary::from_history(&[a, b]);
        assert_eq!(summary.total_putts, 2);
        assert!((summary.avg_launch_speed - 15.0).abs() < 1e-6);
        assert!((summary.avg_total_distance - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_record_serializes_final_field() {
        let record = PuttRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("final").is_some());
        assert_eq!(json["state"], "idle");
    }
}
