// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Thin axum layer over the [`Registry`]:
//! - `POST /parse` normalizes a handwritten recipe name
//! - `POST /entry` registers an ingredient or recipe
//! - `GET /entry/:name` returns a registered entry
//! - `GET /summary?name=...` expands a recipe into ingredients and cook time
//! - `GET /health` and `GET /v1/admin/stats` for operators
//!
//! All client mistakes map to 4xx responses with a plain-text message; none
//! of them is a server fault.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;

pub use config::CookbookConfig;
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::cookbook::{load_seed, Registry};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Default request body limit (64 KiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Log every request/response pair
    pub enable_audit_log: bool,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted request body size
    pub max_body_bytes: usize,
    /// JSON file of entries to register at start-up
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            enable_audit_log: true,
            cors_allowed_origins: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            seed_path: None,
        }
    }
}

/// Shared server state
///
/// Created once at start-up and handed to every handler behind an `Arc`.
pub struct ServerState {
    pub config: ServerConfig,
    /// The only mutable shared resource; it carries its own lock
    pub registry: Registry,
    pub metrics: Arc<ServerMetrics>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            metrics: Arc::new(ServerMetrics::new()),
        }
    }

    /// Build state and register the configured seed entries, if any
    pub fn with_seed(config: ServerConfig) -> Result<Self> {
        let state = Self::new(config);
        if let Some(ref path) = state.config.seed_path {
            load_seed(&state.registry, path)
                .with_context(|| format!("Failed to load seed file: {}", path.display()))?;
        }
        Ok(state)
    }
}

/// Start the cookbook server and run until Ctrl-C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!("Max request body: {} bytes", config.max_body_bytes);
    if config.cors_allowed_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS: {}", config.cors_allowed_origins.join(", "));
    }

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::with_seed(config)?);
    tracing::info!("Registry holds {} entries", state.registry.len());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
