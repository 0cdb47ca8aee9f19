//! Health and version endpoints for container orchestration.
//!
//! `/health` is a liveness probe for the load balancer: it only proves the
//! process can answer HTTP. `/version` reports the deployed build.

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::status::{Health, VersionInfo};

/// Health check handler.
pub async fn health() -> Json<Health> {
    Json(Health::HEALTHY)
}

/// Version handler, resolved from `APP_VERSION` and `CODEBUILD_BUILD_NUMBER`.
pub async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(VersionInfo::resolve(state.env.as_ref()))
}
