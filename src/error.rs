use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::templates::escape_markup;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body>
    <h1>Error {}</h1>
    <p>{}</p>
    <a href="/">Return to dashboard</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            escape_markup(&message)
        );

        (status, Html(body)).into_response()
    }
}
