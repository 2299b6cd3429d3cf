//! Read-only REST API over the stats store.
//!
//! ## Endpoints
//!
//! - `GET /api/v1/putt/current` - current putt plus both track snapshots
//! - `GET /api/v1/putt/history` - all completed putts, oldest first
//! - `GET /api/v1/putt/session` - session summary (averages)
//! - `GET /health` - liveness probe
//!
//! All endpoints are side-effect free and may be called concurrently with
//! the producer loop; each request copies a snapshot out of the store and
//! serializes with no lock held.

pub mod dto;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};

pub use state::AppState;

/// Create the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/putt/current", get(handlers::get_current))
        .route("/api/v1/putt/history", get(handlers::get_history))
        .route("/api/v1/putt/session", get(handlers::get_session))
        .route("/health", get(handlers::health))
        .with_state(state)
}
