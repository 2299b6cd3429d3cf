//! Data transfer objects for the read API and the telemetry wire format.
//!
//! These types separate the wire contract from the core domain types; the
//! field set is the contract, not the formatting mechanism.

use chrono::{DateTime, Utc};
use serde::Serialize;

use puttvision_core::{PuttRecord, SessionSummary, TickSnapshot, TrackedObject};

/// Wire view of one smoothed track.
///
/// `visible == false` means the track is lost; position and velocity must
/// not be trusted in that case.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackDto {
    /// Smoothed center x (px).
    pub x: f32,
    /// Smoothed center y (px).
    pub y: f32,
    /// Velocity x (px/s).
    pub vx: f32,
    /// Velocity y (px/s).
    pub vy: f32,
    /// Confidence of the last matched detection.
    pub confidence: f32,
    /// Whether the track is currently active.
    pub visible: bool,
}

impl From<&TrackedObject> for TrackDto {
    fn from(track: &TrackedObject) -> Self {
        Self {
            x: track.position.0,
            y: track.position.1,
            vx: track.velocity.0,
            vy: track.velocity.1,
            confidence: track.confidence,
            visible: track.valid,
        }
    }
}

/// Wire view of one putt record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PuttDto {
    /// 1-based putt number; 0 before the first stroke.
    pub number: u32,
    /// One of `"idle"`, `"in_motion"`, `"stopped"`.
    pub state: &'static str,
    /// Ball speed at launch (px/s).
    pub launch_speed: f32,
    /// Real-time ball speed (px/s).
    pub current_speed: f32,
    /// Peak speed during the putt (px/s).
    pub peak_speed: f32,
    /// Cumulative path length (px).
    pub total_distance: f32,
    /// Maximum lateral drift from the initial line (px).
    pub break_distance: f32,
    /// Seconds in motion.
    pub time_in_motion: f32,
    /// Start position `[x, y]` (px).
    pub start: [f32; 2],
    /// Latest position `[x, y]` (px).
    #[serde(rename = "final")]
    pub final_pos: [f32; 2],
}

impl From<&PuttRecord> for PuttDto {
    fn from(putt: &PuttRecord) -> Self {
        Self {
            number: putt.number,
            state: putt.state.as_str(),
            launch_speed: putt.launch_speed,
            current_speed: putt.current_speed,
            peak_speed: putt.peak_speed,
            total_distance: putt.total_distance,
            break_distance: putt.break_distance,
            time_in_motion: putt.time_in_motion,
            start: [putt.start.0, putt.start.1],
            final_pos: [putt.final_pos.0, putt.final_pos.1],
        }
    }
}

/// Response for `GET /api/v1/putt/current`.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentResponse {
    /// Producer tick this snapshot was taken at.
    pub tick: u64,
    /// Wall-clock time of the snapshot.
    pub timestamp: DateTime<Utc>,
    /// Ball track.
    pub ball: TrackDto,
    /// Putter track.
    pub putter: TrackDto,
    /// Current putt.
    pub putt: PuttDto,
}

impl From<&TickSnapshot> for CurrentResponse {
    fn from(snapshot: &TickSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            timestamp: snapshot.timestamp,
            ball: TrackDto::from(&snapshot.ball),
            putter: TrackDto::from(&snapshot.putter),
            putt: PuttDto::from(&snapshot.putt),
        }
    }
}

/// Response for `GET /api/v1/putt/history`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    /// Number of completed putts.
    pub total: usize,
    /// Completed putts, oldest first.
    pub putts: Vec<PuttDto>,
}

/// Response for `GET /api/v1/putt/session`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionResponse {
    /// Number of completed putts.
    pub total_putts: u32,
    /// Mean launch speed (px/s).
    pub avg_launch_speed: f32,
    /// Mean path length (px).
    pub avg_total_distance: f32,
    /// Mean break distance (px).
    pub avg_break_distance: f32,
    /// Mean time in motion (s).
    pub avg_time_in_motion: f32,
}

impl From<SessionSummary> for SessionResponse {
    fn from(summary: SessionSummary) -> Self {
        Self {
            total_putts: summary.total_putts,
            avg_launch_speed: summary.avg_launch_speed,
            avg_total_distance: summary.avg_total_distance,
            avg_break_distance: summary.avg_break_distance,
            avg_time_in_motion: summary.avg_time_in_motion,
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Core library version.
    pub version: &'static str,
    /// Producer ticks completed so far.
    pub tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use puttvision_core::{ObjectClass, PuttState};

    #[test]
    fn test_track_dto_conversion() {
        let mut track = TrackedObject::new(ObjectClass::Ball);
        track.position = (10.0, 20.0);
        track.velocity = (1.0, -2.0);
        track.confidence = 0.7;
        track.valid = true;

        let dto = TrackDto::from(&track);
        assert_eq!(dto.x, 10.0);
        assert_eq!(dto.y, 20.0);
        assert_eq!(dto.vx, 1.0);
        assert_eq!(dto.vy, -2.0);
        assert!(dto.visible);
    }

    #[test]
    fn test_putt_dto_serializes_state_tag_and_final() {
        let mut record = PuttRecord::default();
        record.state = PuttState::InMotion;
        record.number = 3;
        record.final_pos = (42.0, 7.0);

        let dto = PuttDto::from(&record);
        let json = serde_json::to_value(dto).unwrap();
        assert_eq!(json["state"], "in_motion");
        assert_eq!(json["number"], 3);
        assert_eq!(json["final"], serde_json::json!([42.0, 7.0]));
    }
}
