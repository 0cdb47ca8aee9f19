//! Status Service entry point.
//!
//! Initializes tracing, resolves process settings from CLI arguments and the
//! environment, builds the Axum router, and starts the HTTP server.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use status_service::config::{
    LogFormat, ProcessEnv, ServerConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT,
    DEFAULT_PORT, STATIC_DIR,
};
use status_service::http::start_server;
use status_service::routes::create_router;
use status_service::state::AppState;
use status_service::templates::init_templates;

/// Status Service: deployment metadata as JSON or an HTML dashboard
#[derive(Parser, Debug)]
#[command(name = "status-service", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory served under /static (holds logo.png)
    #[arg(long, env = "STATIC_DIR", default_value = STATIC_DIR)]
    static_dir: PathBuf,

    /// Log level filter (e.g., "status_service=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = DEFAULT_LOG_FORMAT)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
    };

    let static_root = config.static_root().map(Path::to_path_buf);
    match &static_root {
        Some(dir) => tracing::info!(dir = %dir.display(), "Serving static assets"),
        None => tracing::warn!(
            dir = %config.static_dir.display(),
            "Static directory not found, dashboard will show a text logo unless LOGO_URL is set"
        ),
    }

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let state = AppState::new(ProcessEnv, tera, static_root.is_some());
    let app = create_router(state, static_root.as_deref());

    start_server(app, &config).await?;

    Ok(())
}
