//! HTTP server module

mod api;
mod interview;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub use api::HealthResponse;
pub use interview::{
    AnswerRequest, AnswerResponse, ContinueResponse, ExitRequest, FinishedResponse, StartRequest,
    StartResponse,
};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(interview::start))
        .route("/answer", post(interview::answer))
        .route("/exit", post(interview::exit))
        .route("/api/health", get(api::health))
        .route("/api/sessions/:id", get(api::session_status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
