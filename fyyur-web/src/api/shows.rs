//! Show pages

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use tracing::{error, info};

use super::submitted_fields;
use crate::api::home::render_home;
use crate::db;
use crate::error::PageResult;
use crate::forms::{default_start_time, parse_show};
use crate::templates::{page_context, render, Flash};
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let shows = db::shows::list_shows(&state.db).await?;

    let mut context = page_context("venues");
    context.insert("shows", &shows);
    render(&state.templates, "pages/shows.html", &context)
}

/// GET /shows/create
///
/// Artist and venue pickers are filled from the current records.
pub async fn create_show_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = db::artists::list_artists(&state.db).await?;
    let venues = db::venues::list_venue_names(&state.db).await?;

    let mut context = page_context("venues");
    context.insert("artists", &artists);
    context.insert("venues", &venues);
    context.insert("start_time", &default_start_time());
    render(&state.templates, "forms/new_show.html", &context)
}

/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Html<String>> {
    let outcome = match submitted_fields(form).and_then(|f| parse_show(&f)) {
        Ok(show) => db::shows::create_show(&state.db, &show).await,
        Err(e) => Err(e),
    };

    let flash = match outcome {
        Ok(id) => {
            info!("Created show {}", id);
            Flash::success("Show was successfully listed!")
        }
        Err(e) => {
            error!("Show not created: {}", e);
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    render_home(&state, Some(flash))
}
