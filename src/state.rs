//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::EnvSource;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Nothing here changes after startup. Status records are resolved from `env`
/// on each request rather than cached.
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn EnvSource>,
    pub tera: Arc<Tera>,
    /// Whether `/static` is served, which decides the logo fallback
    pub static_mounted: bool,
}

impl AppState {
    /// Creates a new application state from the given environment source and templates.
    pub fn new(env: impl EnvSource + 'static, tera: Tera, static_mounted: bool) -> Self {
        Self {
            env: Arc::new(env),
            tera: Arc::new(tera),
            static_mounted,
        }
    }
}
