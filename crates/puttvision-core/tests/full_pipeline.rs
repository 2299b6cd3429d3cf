//! Integration test for the full core pipeline with deterministic frames:
//! detections -> Tracker -> StatsStore -> snapshots.
//!
//! No mocks, no random data. The synthetic putt is a straight roll with a
//! single-frame detector dropout in the middle.

use puttvision_core::{
    BoundingBox, Detection, EngineConfig, ObjectClass, PuttState, StatsStore, Tracker,
};

const DT: f64 = 0.1;

fn ball_det(cx: f32, cy: f32) -> Detection {
    Detection::new(
        ObjectClass::Ball,
        0.92,
        BoundingBox::new(cx - 6.0, cy - 6.0, cx + 6.0, cy + 6.0),
    )
}

fn putter_det(cx: f32, cy: f32) -> Detection {
    Detection::new(
        ObjectClass::Putter,
        0.85,
        BoundingBox::new(cx - 20.0, cy - 20.0, cx + 20.0, cy + 20.0),
    )
}

fn tick(tracker: &mut Tracker, stats: &StatsStore, detections: &[Detection]) {
    tracker.update(detections, DT);
    stats.update(tracker.ball(), tracker.putter(), DT);
}

#[test]
fn test_full_putt_lifecycle_through_tracker_and_store() {
    let config = EngineConfig::builder()
        .alpha(0.9)
        .max_lost(5)
        .motion_threshold(5.0)
        .stop_frames_required(3)
        .build();
    config.validate().unwrap();

    let mut tracker = Tracker::new(&config);
    let stats = StatsStore::new(&config);

    // Address phase: ball and putter at rest.
    for _ in 0..10 {
        tick(
            &mut tracker,
            &stats,
            &[ball_det(100.0, 100.0), putter_det(80.0, 120.0)],
        );
    }
    let snap = stats.snapshot_current();
    assert!(snap.ball.valid);
    assert!(snap.putter.valid);
    assert_eq!(snap.putt.state, PuttState::Idle);
    assert_eq!(snap.tick, 10);

    // The stroke: ball rolls +20 px per frame (200 px/s), with a
    // single-frame detector dropout halfway through.
    let mut x = 100.0_f32;
    for i in 0..20 {
        x += 20.0;
        if i == 10 {
            tick(&mut tracker, &stats, &[putter_det(80.0, 120.0)]);
            // One miss is well within max_lost: the ball coasts, stays valid.
            assert!(stats.snapshot_current().ball.valid);
        } else {
            tick(
                &mut tracker,
                &stats,
                &[ball_det(x, 100.0), putter_det(80.0, 120.0)],
            );
        }
    }
    let rolling = stats.snapshot_current();
    assert_eq!(rolling.putt.state, PuttState::InMotion);
    assert_eq!(rolling.putt.number, 1);
    assert!(rolling.putt.launch_speed > 5.0);
    assert!(rolling.putt.peak_speed >= rolling.putt.launch_speed);
    assert!(rolling.putt.total_distance > 100.0);
    assert!(rolling.putt.time_in_motion > 0.0);

    // Roll-out: ball holds still until the stop debounce fires.
    for _ in 0..20 {
        tick(
            &mut tracker,
            &stats,
            &[ball_det(x, 100.0), putter_det(80.0, 120.0)],
        );
    }
    let stopped = stats.snapshot_current();
    assert_eq!(stopped.putt.state, PuttState::Stopped);

    let history = stats.snapshot_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].number, 1);
    assert!(history[0].total_distance > 100.0);

    let session = stats.snapshot_session();
    assert_eq!(session.total_putts, 1);
    assert!((session.avg_launch_speed - history[0].launch_speed).abs() < 1e-4);
    assert!((session.avg_total_distance - history[0].total_distance).abs() < 1e-4);
}

#[test]
fn test_two_putts_accumulate_in_history() {
    let config = EngineConfig::builder()
        .alpha(0.9)
        .motion_threshold(5.0)
        .stop_frames_required(3)
        .build();
    let mut tracker = Tracker::new(&config);
    let stats = StatsStore::new(&config);

    let mut x = 100.0_f32;
    // Settle the track first so the stroke produces clean velocity.
    for _ in 0..5 {
        tick(&mut tracker, &stats, &[ball_det(x, 100.0)]);
    }

    for putt in 1..=2u32 {
        // Stroke.
        for _ in 0..15 {
            x += 15.0;
            tick(&mut tracker, &stats, &[ball_det(x, 100.0)]);
        }
        assert_eq!(stats.snapshot_current().putt.number, putt);

        // Rest until finalized.
        for _ in 0..25 {
            tick(&mut tracker, &stats, &[ball_det(x, 100.0)]);
        }
        assert_eq!(stats.snapshot_current().putt.state, PuttState::Stopped);
        assert_eq!(stats.snapshot_history().len(), putt as usize);
    }

    let history = stats.snapshot_history();
    assert_eq!(history[0].number, 1);
    assert_eq!(history[1].number, 2);
    assert_eq!(stats.snapshot_session().total_putts, 2);
}
