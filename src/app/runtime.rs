//! Runtime initialization and setup

use crate::app::{config::AppConfig, logging::init_logging};
use crate::server::CalculatorServer;
use anyhow::Result;
use tracing::debug;

/// Initialize the application with proper logging and configuration
pub fn initialize_app(config: &AppConfig) {
    init_logging(config);
    debug!(?config, "configuration loaded");
}

/// Run the HTTP server described by `config` until shutdown
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    CalculatorServer::new(addr, config.cors).start().await
}
