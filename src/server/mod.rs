//! HTTP interface for the calculator
//!
//! Routes:
//! - `GET /` calculator page
//! - `GET /greet?name=` plain-text greeting
//! - `GET /health` liveness check
//! - `POST /calculate` equation or operation evaluation

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod ui;

pub use error::ApiError;

/// Build the application router
pub fn build_router(cors: bool) -> Router {
    let router = Router::new()
        .route("/", get(handlers::calculator_ui))
        .route("/greet", get(handlers::greet))
        .route("/health", get(handlers::health_check))
        .route("/calculate", post(handlers::calculate_handler))
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// HTTP server for the calculator
pub struct CalculatorServer {
    addr: SocketAddr,
    cors: bool,
}

impl CalculatorServer {
    pub fn new(addr: SocketAddr, cors: bool) -> Self {
        Self { addr, cors }
    }

    /// Serve until Ctrl+C is received
    pub async fn start(self) -> Result<()> {
        let app = build_router(self.cors);

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.addr))?;
        info!("Calculator server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        info!("Calculator server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
