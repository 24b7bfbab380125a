//! Home page and the 404 fallback

use axum::{extract::State, response::Html};

use crate::error::{PageError, PageResult};
use crate::templates::{page_context, render, Flash};
use crate::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    render_home(&state, None)
}

/// Home page, optionally carrying the outcome of a form submission
pub(crate) fn render_home(state: &AppState, flash: Option<Flash>) -> PageResult<Html<String>> {
    let mut context = page_context("venues");
    context.insert("flash", &flash);
    render(&state.templates, "pages/home.html", &context)
}

/// Fallback for unknown routes
pub async fn not_found() -> PageError {
    PageError::NotFound("route".to_string())
}
