//! Request handlers.
//!
//! All handlers are infallible: they copy a snapshot out of the store and
//! serialize it, so there is no request-level error path.

use axum::extract::State;
use axum::Json;

use super::dto::{
    CurrentResponse, HealthResponse, HistoryResponse, PuttDto, SessionResponse,
};
use super::state::AppState;

/// `GET /api/v1/putt/current`
#[tracing::instrument(skip(state))]
pub async fn get_current(State(state): State<AppState>) -> Json<CurrentResponse> {
    let snapshot = state.stats().snapshot_current();
    Json(CurrentResponse::from(&snapshot))
}

/// `GET /api/v1/putt/history`
#[tracing::instrument(skip(state))]
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let history = state.stats().snapshot_history();
    let putts: Vec<PuttDto> = history.iter().map(PuttDto::from).collect();
    Json(HistoryResponse {
        total: putts.len(),
        putts,
    })
}

/// `GET /api/v1/putt/session`
#[tracing::instrument(skip(state))]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let summary = state.stats().snapshot_session();
    Json(SessionResponse::from(summary))
}

/// `GET /health`
#[tracing::instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: puttvision_core::VERSION,
        tick: state.stats().tick(),
    })
}
