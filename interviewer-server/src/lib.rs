//! interviewer-server - HTTP server for adaptive interviews
//!
//! This crate owns the [`InterviewController`] and exposes it over a small
//! JSON API: `/start`, `/answer` and `/exit`, plus health and session
//! status endpoints under `/api`.

mod error;
pub mod http;
mod state;

use std::sync::Arc;

use interviewer_core::InterviewController;
use tokio::net::TcpListener;

pub use error::{ApiError, ErrorResponse, ServerError};
pub use http::create_router;
pub use state::AppState;

/// The main interviewer server
pub struct InterviewServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl InterviewServer {
    /// Create a server around an existing controller
    pub fn new(config: ServerConfig, controller: Arc<InterviewController>) -> Self {
        Self::with_state(config, Arc::new(AppState::new(controller)))
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("interviewer server listening on {}", addr);

        self.run_with_listener(listener).await
    }

    /// Run the server on an already bound listener
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7480,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "127.0.0.1:7480")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
