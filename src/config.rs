//! Configuration sources and constants.
//!
//! Process settings (bind address, static directory, logging) come from CLI
//! arguments with environment fallbacks. Deployment metadata is read through
//! the [`EnvSource`] trait so handlers never touch the process environment
//! directly. Defaults for every status field live here as constants.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use const_format::formatcp;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Static assets (logo) - long cache
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Dashboard output depends on the live environment and on negotiation
pub const CACHE_CONTROL_DASHBOARD: &str = "no-cache";

/// Probe endpoints must never be served from a cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

pub const CACHE_CONTROL_STATIC: &str = formatcp!("public, max-age={}", HTTP_CACHE_STATIC_MAX_AGE);

/// Request hints that select the dashboard representation
pub const VARY_DASHBOARD: &str = "Accept, X-Requested-With";

// =============================================================================
// Status Field Defaults
// =============================================================================

pub const DEFAULT_PROJECT_NAME: &str = "MTech Flask CI/CD Pipeline01";
pub const DEFAULT_DESCRIPTION: &str = "Fully automated AWS ECS CI/CD deployment for a Flask API using CodeBuild, CodePipeline, and Docker.";
pub const DEFAULT_CLUSTER: &str = "mtech-cicd-cluster";
pub const DEFAULT_SERVICE: &str = "flask-api-service";
pub const DEFAULT_TASK_DEFINITION: &str = "flask-api-task";
pub const DEFAULT_REGION: &str = "ap-south-1";
pub const DEFAULT_REPOSITORY: &str = "GitHub → ECR → ECS";
pub const DEFAULT_STATUS: &str = "Deployment successful and running";
pub const DEFAULT_MESSAGE: &str = "Hello World from Flask CI/CD v2!";
pub const DEFAULT_VERSION: &str = "v2.0";
pub const DEFAULT_BUILD: &str = "manual";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default bind host (all interfaces, so the container runtime can route to us)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// URL prefix the static directory is mounted under
pub const STATIC_URL_PREFIX: &str = "/static";

/// Bundled logo file name inside the static directory
pub const LOGO_FILE: &str = "logo.png";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "status_service=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Read-only view of environment variables.
///
/// Lookups treat an empty value the same as an unset one, so callers only
/// need to handle `None`.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` if unset or empty.
    fn var_or(&self, key: &str, default: &str) -> String {
        self.var(key).unwrap_or_else(|| default.to_string())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Process-level settings resolved at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// The static directory, if it exists and can be mounted.
    pub fn static_root(&self) -> Option<&Path> {
        if self.static_dir.is_dir() {
            Some(self.static_dir.as_path())
        } else {
            None
        }
    }
}
