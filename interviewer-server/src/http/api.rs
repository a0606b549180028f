//! REST API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use interviewer_core::SessionSnapshot;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of sessions held, finished ones included
    pub active_sessions: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let active_sessions = state.controller.session_count().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        active_sessions,
    })
}

/// GET /api/sessions/:id - progress of one interview
pub async fn session_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = state.controller.session_status(&id).await?;
    Ok(Json(snapshot))
}
