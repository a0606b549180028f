//! Serve command for running the interview HTTP server

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use interviewer_core::{InterviewController, MemorySessionStore};
use interviewer_server::{InterviewServer, ServerConfig};
use tracing::info;

use super::{build_collaborators, controller_config};
use crate::config::{Backend, ConfigLoader, InterviewerConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Question and grading backend (overrides config)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply(&self, mut config: InterviewerConfig) -> InterviewerConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(backend) = self.backend {
            config.collaborators.backend = backend;
        }
        config
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = args.apply(ConfigLoader::load()?);

    let controller = InterviewController::new(
        Arc::new(MemorySessionStore::new()),
        build_collaborators(&config),
        controller_config(&config),
    );

    let server_config = ServerConfig::new(config.server.host.clone(), config.server.port);
    info!("Starting interviewer server on {}", server_config.addr());

    let server = InterviewServer::new(server_config, Arc::new(controller));
    server.run().await.map_err(Into::into)
}
