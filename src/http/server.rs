//! HTTP server startup logic.
//!
//! The service speaks plain HTTP; TLS is terminated by the load balancer in
//! front of it.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::ServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Parse the configured host and port into a socket address.
pub fn listen_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
    format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Address(format!("{}:{}: {}", config.host, config.port, e)))
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let handle = Handle::new();

    tracing::info!(%addr, "Starting HTTP server");

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
