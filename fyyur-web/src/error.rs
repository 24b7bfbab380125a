//! Error types for fyyur-web page handlers
//!
//! Page errors render the standalone 404/500 pages rather than JSON.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

const NOT_FOUND_HTML: &str = include_str!("../static/404.html");
const SERVER_ERROR_HTML: &str = include_str!("../static/500.html");

/// Page handler error
#[derive(Debug, Error)]
pub enum PageError {
    /// Unknown route or record (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Template rendering failed (500)
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// fyyur-common error (database, I/O, ...)
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::Common(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(_) | PageError::Common(fyyur_common::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_HTML)).into_response()
            }
        }
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
