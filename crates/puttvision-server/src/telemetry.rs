//! Per-tick UDP JSON telemetry.
//!
//! One datagram per producer tick, fire-and-forget. The socket is bound to
//! an ephemeral port and connected up front so each send is a single
//! syscall with no per-tick address resolution. Send failures are reported
//! to the caller and never retried; the next tick produces the next frame.

use std::io;

use serde::Serialize;
use tokio::net::UdpSocket;

use puttvision_core::TickSnapshot;

use crate::api::dto::{PuttDto, TrackDto};

/// One telemetry datagram, serialized as a single JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryFrame {
    /// Snapshot wall-clock time in milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Producer tick the frame was taken at.
    pub tick: u64,
    /// Ball track.
    pub ball: TrackDto,
    /// Putter track.
    pub putter: TrackDto,
    /// Current putt; omitted entirely when putt telemetry is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub putt: Option<PuttDto>,
}

impl TelemetryFrame {
    fn from_snapshot(snapshot: &TickSnapshot, include_putt: bool) -> Self {
        Self {
            timestamp_ms: snapshot.timestamp.timestamp_millis(),
            tick: snapshot.tick,
            ball: TrackDto::from(&snapshot.ball),
            putter: TrackDto::from(&snapshot.putter),
            putt: include_putt.then(|| PuttDto::from(&snapshot.putt)),
        }
    }
}

/// Connected UDP sender for telemetry frames.
pub struct TelemetrySender {
    socket: UdpSocket,
    include_putt: bool,
}

impl TelemetrySender {
    /// Bind an ephemeral local socket and connect it to `host:port`.
    pub async fn connect(host: &str, port: u16, include_putt: bool) -> io::Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect((host, port)).await?;
        tracing::info!(host, port, include_putt, "telemetry sender connected");
        Ok(Self {
            socket,
            include_putt,
        })
    }

    /// Serialize `snapshot` and send it as one datagram.
    pub async fn send(&self, snapshot: &TickSnapshot) -> io::Result<()> {
        let frame = TelemetryFrame::from_snapshot(snapshot, self.include_putt);
        let payload = serde_json::to_vec(&frame)?;
        self.socket.send(&payload).await?;
        Ok(())
    }
}
