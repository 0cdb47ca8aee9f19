//! HTTP server module.
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Static asset serving for the dashboard logo

mod server;
mod shutdown;
pub mod static_files;

pub use server::{listen_addr, start_server, ServerError};
