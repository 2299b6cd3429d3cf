//! Single-producer frame pipeline.
//!
//! One task owns the tracker and drives the stats store; detection frames
//! arrive over a channel from whatever source is configured (live camera
//! feed or the built-in simulator). Telemetry is sent after the store
//! update with no lock held, and a failed send is logged and skipped.

use std::sync::Arc;

use tokio::sync::mpsc;

use puttvision_core::{Detection, StatsStore, Tracker};

use crate::telemetry::TelemetrySender;

/// One detection frame handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw detections for this frame, any order, any count.
    pub detections: Vec<Detection>,
    /// Elapsed seconds since the previous frame.
    pub dt: f64,
}

/// Consume frames until the channel closes.
///
/// Per frame: step the tracker, step the store under its write lock, then
/// snapshot and send telemetry outside the lock.
pub async fn run(
    mut tracker: Tracker,
    stats: Arc<StatsStore>,
    mut frames: mpsc::Receiver<Frame>,
    telemetry: Option<TelemetrySender>,
) {
    tracing::info!(telemetry = telemetry.is_some(), "pipeline started");

    while let Some(frame) = frames.recv().await {
        tracker.update(&frame.detections, frame.dt);
        stats.update(tracker.ball(), tracker.putter(), frame.dt);

        if let Some(sender) = &telemetry {
            let snapshot = stats.snapshot_current();
            if let Err(err) = sender.send(&snapshot).await {
                tracing::warn!(error = %err, tick = snapshot.tick, "telemetry send failed");
            }
        }
    }

    tracing::info!(ticks = stats.tick(), "pipeline stopped, frame source closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use puttvision_core::{BoundingBox, EngineConfig, ObjectClass};

    fn ball_frame(x: f32, dt: f64) -> Frame {
        Frame {
            detections: vec![Detection {
                class: ObjectClass::Ball,
                confidence: 0.9,
                bbox: BoundingBox {
                    x1: x - 5.0,
                    y1: 95.0,
                    x2: x + 5.0,
                    y2: 105.0,
                },
            }],
            dt,
        }
    }

    #[tokio::test]
    async fn test_pipeline_ticks_once_per_frame() {
        let config = EngineConfig::default();
        let stats = Arc::new(StatsStore::new(&config));
        let (tx, rx) = mpsc::channel(16);

        for i in 0..5 {
            tx.send(ball_frame(i as f32 * 10.0, 1.0 / 30.0)).await.unwrap();
        }
        drop(tx);

        run(Tracker::new(&config), Arc::clone(&stats), rx, None).await;

        assert_eq!(stats.tick(), 5);
        let snap = stats.snapshot_current();
        assert!(snap.ball.valid);
    }

    #[tokio::test]
    async fn test_pipeline_forwards_telemetry_per_frame() {
        let config = EngineConfig::default();
        let stats = Arc::new(StatsStore::new(&config));

        let receiver = tokio::net::UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();
        let sender = TelemetrySender::connect("127.0.0.1", port, true)
            .await
            .unwrap();

        let (tx, rx) = mpsc::channel(16);
        for i in 0..3 {
            tx.send(ball_frame(i as f32 * 10.0, 1.0 / 30.0)).await.unwrap();
        }
        drop(tx);

        run(Tracker::new(&config), Arc::clone(&stats), rx, Some(sender)).await;

        let mut buf = [0u8; 2048];
        for expected_tick in 1..=3u64 {
            let n = receiver.recv(&mut buf).await.unwrap();
            let value: serde_json::Value = serde_json::from_slice(&buf[..n]).unwrap();
            assert_eq!(value["tick"], expected_tick);
        }
    }
}
