//! Venue pages
//!
//! List grouped by area, search, detail, create, edit and delete.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use fyyur_common::dates::today;
use fyyur_common::genres::{GENRES, STATES};
use fyyur_common::Error;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::{record_id, submitted_fields, SearchForm};
use crate::api::home::render_home;
use crate::db;
use crate::error::{PageError, PageResult};
use crate::forms::{parse_venue, VenueFormValues};
use crate::templates::{page_context, render, Flash};
use crate::AppState;

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let areas = db::venues::list_areas(&state.db, today()).await?;

    let mut context = page_context("venues");
    context.insert("areas", &areas);
    render(&state.templates, "pages/venues.html", &context)
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = db::venues::search(&state.db, &form.search_term, today()).await?;
    debug!("Venue search {:?}: {} results", form.search_term, results.count);

    let mut context = page_context("venues");
    context.insert("results", &results);
    context.insert("search_term", &form.search_term);
    render(&state.templates, "pages/search_venues.html", &context)
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    venue_id: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let venue_id = record_id(venue_id, "venue")?;
    let venue = db::venues::venue_detail(&state.db, venue_id, today())
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    let mut context = page_context("venues");
    context.insert("venue", &venue);
    render(&state.templates, "pages/show_venue.html", &context)
}

fn venue_form_context(values: &VenueFormValues) -> tera::Context {
    let mut context = page_context("venues");
    context.insert("venue", values);
    context.insert("genre_choices", GENRES);
    context.insert("state_choices", STATES);
    context
}

/// GET /venues/create
pub async fn create_venue_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    let context = venue_form_context(&VenueFormValues::default());
    render(&state.templates, "forms/new_venue.html", &context)
}

/// POST /venues/create
///
/// Renders the home page with a success or failure flash either way.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Html<String>> {
    let fields = submitted_fields(form);
    let name = fields
        .as_ref()
        .ok()
        .and_then(|f| f.text("name"))
        .unwrap_or_default();

    let outcome = match fields.and_then(|f| parse_venue(&f)) {
        Ok(venue) => db::venues::create_venue(&state.db, &venue).await,
        Err(e) => Err(e),
    };

    let flash = match outcome {
        Ok(id) => {
            info!("Created venue {} ({})", id, name);
            Flash::success(format!("Venue {} was successfully listed!", name))
        }
        Err(e) => {
            error!("Venue {:?} not created: {}", name, e);
            Flash::error(format!("An error occurred. Venue {} could not be listed.", name))
        }
    };

    render_home(&state, Some(flash))
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    venue_id: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let venue_id = record_id(venue_id, "venue")?;
    let venue = db::venues::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    let mut context = venue_form_context(&VenueFormValues::from(&venue));
    context.insert("venue_id", &venue_id);
    render(&state.templates, "forms/edit_venue.html", &context)
}

/// POST /venues/:venue_id/edit
///
/// Always redirects back to the venue page; a rejected update is logged.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    venue_id: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Redirect> {
    let venue_id = record_id(venue_id, "venue")?;

    let outcome = match submitted_fields(form).and_then(|f| parse_venue(&f)) {
        Ok(venue) => db::venues::update_venue(&state.db, venue_id, &venue).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => info!("Updated venue {}", venue_id),
        Err(e) => warn!("Venue {} not updated: {}", venue_id, e),
    }

    Ok(Redirect::to(&format!("/venues/{}", venue_id)))
}

/// DELETE /venues/:venue_id response body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// DELETE /venues/:venue_id
///
/// Removes the venue and its shows. Called from the venue page, which
/// returns to the home page on success.
pub async fn delete_venue(
    State(state): State<AppState>,
    venue_id: Result<Path<i64>, PathRejection>,
) -> (StatusCode, Json<DeleteResponse>) {
    let reply = |status: StatusCode, success: bool, message: String| {
        (status, Json(DeleteResponse { success, message }))
    };

    let Ok(Path(venue_id)) = venue_id else {
        return reply(StatusCode::NOT_FOUND, false, "Unknown venue.".to_string());
    };

    match db::venues::delete_venue(&state.db, venue_id).await {
        Ok(name) => {
            info!("Deleted venue {} ({})", venue_id, name);
            reply(
                StatusCode::OK,
                true,
                format!("Venue {} was successfully deleted!", name),
            )
        }
        Err(Error::NotFound(_)) => reply(
            StatusCode::NOT_FOUND,
            false,
            format!("Venue {} could not be found.", venue_id),
        ),
        Err(e) => {
            error!("Venue {} not deleted: {}", venue_id, e);
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                format!("An error occurred. Venue {} could not be deleted.", venue_id),
            )
        }
    }
}
