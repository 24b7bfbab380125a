//! Static assets compiled into the binary

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// GET /static/main.css
pub async fn serve_main_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        MAIN_CSS,
    )
        .into_response()
}
