//! Handler for the status dashboard.
//!
//! Serves the same [`ProjectStatus`] either as JSON or as the rendered HTML
//! page, depending on what the request asks for.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::instrument;

use crate::error::AppError;
use crate::negotiate::{negotiate, Hints, Representation};
use crate::state::AppState;
use crate::status::{resolve_logo_url, ProjectStatus};
use crate::templates::render_dashboard;

/// Dashboard handler. The status record is resolved fresh for every request.
#[instrument(name = "home::index", skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let status = ProjectStatus::resolve(state.env.as_ref());

    let representation = negotiate(&Hints {
        query: &query,
        headers: &headers,
    });
    tracing::debug!(?representation, "Negotiated dashboard representation");

    match representation {
        Representation::Json => Ok(Json(status).into_response()),
        Representation::Html => {
            let logo_url = resolve_logo_url(state.env.as_ref(), state.static_mounted);
            let html = render_dashboard(&state.tera, &status, &logo_url)?;
            Ok(Html(html).into_response())
        }
    }
}
