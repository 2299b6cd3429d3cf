//! PuttVision server binary.
//!
//! Wires the simulated detection source, the producer pipeline, the
//! optional UDP telemetry sender, and the HTTP read API together.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use puttvision_core::{EngineConfig, StatsStore, Tracker};
use puttvision_server::api::{self, AppState};
use puttvision_server::telemetry::TelemetrySender;
use puttvision_server::{pipeline, simulate};

#[derive(Debug, Parser)]
#[command(name = "puttvision-server", about = "PuttVision putt tracking server")]
struct Args {
    /// HTTP port for the read API.
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Telemetry destination host; telemetry is disabled when unset.
    #[arg(long)]
    telemetry_host: Option<String>,

    /// Telemetry destination UDP port.
    #[arg(long, default_value_t = 7001)]
    telemetry_port: u16,

    /// Omit the putt record from telemetry frames.
    #[arg(long, default_value_t = false)]
    no_putt_telemetry: bool,

    /// Simulator tick interval in milliseconds.
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Simulator random seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// EMA smoothing factor in (0, 1); higher follows detections faster.
    #[arg(long, default_value_t = 0.6)]
    alpha: f32,

    /// Missed frames tolerated before a track is dropped.
    #[arg(long, default_value_t = 15)]
    max_lost: u32,

    /// Ball speed (px/s) above which a putt is considered in motion.
    #[arg(long, default_value_t = 5.0)]
    motion_threshold: f32,

    /// Consecutive below-threshold frames required to declare a stop.
    #[arg(long, default_value_t = 15)]
    stop_frames: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = EngineConfig::builder()
        .alpha(args.alpha)
        .max_lost(args.max_lost)
        .motion_threshold(args.motion_threshold)
        .stop_frames_required(args.stop_frames)
        .build();
    config.validate()?;

    let stats = Arc::new(StatsStore::new(&config));
    let tracker = Tracker::new(&config);

    let telemetry = match &args.telemetry_host {
        Some(host) => Some(
            TelemetrySender::connect(host, args.telemetry_port, !args.no_putt_telemetry)
                .await?,
        ),
        None => None,
    };

    let (frame_tx, frame_rx) = mpsc::channel(64);
    tokio::spawn(simulate::run(frame_tx, args.tick_ms, args.seed));
    tokio::spawn(pipeline::run(
        tracker,
        Arc::clone(&stats),
        frame_rx,
        telemetry,
    ));

    let router = api::create_router(AppState::new(stats)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.http_port));
    let listener = bind_with_retry(addr).await;
    tracing::info!(%addr, "read API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Bind the API listener, retrying with backoff while the port is busy.
async fn bind_with_retry(addr: SocketAddr) -> TcpListener {
    let mut delay = Duration::from_millis(250);
    loop {
        match TcpListener::bind(addr).await {
            Ok(listener) => return listener,
            Err(err) => {
                tracing::warn!(%addr, error = %err, retry_in = ?delay, "bind failed");
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(Duration::from_secs(10));
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
