//! HTTP route handlers.
//!
//! Routes are grouped by how they may be cached. The dashboard varies on
//! request hints, probes are never cached, and static assets get a long TTL.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use std::path::Path;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL, VARY};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CACHE_CONTROL_DASHBOARD, CACHE_CONTROL_PROBE, CACHE_CONTROL_STATIC, STATIC_URL_PREFIX,
    VARY_DASHBOARD,
};
use crate::error::AppError;
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
///
/// `/static` is only mounted when `static_root` is given; `state.static_mounted`
/// should agree with it so the dashboard does not link a logo that 404s.
pub fn create_router(state: AppState, static_root: Option<&Path>) -> Router {
    // Dashboard - revalidate every time, representation depends on request hints
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DASHBOARD),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            VARY,
            HeaderValue::from_static(VARY_DASHBOARD),
        ));

    // Health and version - no caching, always fresh for probes
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/version", get(health::version))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    let mut router = Router::new().merge(home_routes).merge(probe_routes);

    if let Some(root) = static_root {
        let static_routes = Router::new()
            .nest_service(STATIC_URL_PREFIX, create_static_service(root))
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_STATIC),
            ));
        router = router.merge(static_routes);
    }

    router
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
