//! Artist pages

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::{Html, Redirect},
    Form,
};
use fyyur_common::dates::today;
use fyyur_common::genres::{GENRES, STATES};
use tracing::{debug, error, info, warn};

use super::{record_id, submitted_fields, SearchForm};
use crate::api::home::render_home;
use crate::db;
use crate::error::{PageError, PageResult};
use crate::forms::{parse_artist, ArtistFormValues};
use crate::templates::{page_context, render, Flash};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = db::artists::list_artists(&state.db).await?;

    let mut context = page_context("artists");
    context.insert("artists", &artists);
    render(&state.templates, "pages/artists.html", &context)
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult<Html<String>> {
    let results = db::artists::search(&state.db, &form.search_term, today()).await?;
    debug!("Artist search {:?}: {} results", form.search_term, results.count);

    let mut context = page_context("artists");
    context.insert("results", &results);
    context.insert("search_term", &form.search_term);
    render(&state.templates, "pages/search_artists.html", &context)
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    artist_id: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let artist_id = record_id(artist_id, "artist")?;
    let artist = db::artists::artist_detail(&state.db, artist_id, today())
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    let mut context = page_context("artists");
    context.insert("artist", &artist);
    render(&state.templates, "pages/show_artist.html", &context)
}

fn artist_form_context(values: &ArtistFormValues) -> tera::Context {
    let mut context = page_context("artists");
    context.insert("artist", values);
    context.insert("genre_choices", GENRES);
    context.insert("state_choices", STATES);
    context
}

/// GET /artists/create
pub async fn create_artist_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    let context = artist_form_context(&ArtistFormValues::default());
    render(&state.templates, "forms/new_artist.html", &context)
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Html<String>> {
    let fields = submitted_fields(form);
    let name = fields
        .as_ref()
        .ok()
        .and_then(|f| f.text("name"))
        .unwrap_or_default();

    let outcome = match fields.and_then(|f| parse_artist(&f)) {
        Ok(artist) => db::artists::create_artist(&state.db, &artist).await,
        Err(e) => Err(e),
    };

    let flash = match outcome {
        Ok(id) => {
            info!("Created artist {} ({})", id, name);
            Flash::success(format!("Artist {} was successfully listed!", name))
        }
        Err(e) => {
            error!("Artist {:?} not created: {}", name, e);
            Flash::error(format!("An error occurred. Artist {} could not be listed.", name))
        }
    };

    render_home(&state, Some(flash))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    artist_id: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let artist_id = record_id(artist_id, "artist")?;
    let artist = db::artists::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    let mut context = artist_form_context(&ArtistFormValues::from(&artist));
    context.insert("artist_id", &artist_id);
    render(&state.templates, "forms/edit_artist.html", &context)
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    artist_id: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Redirect> {
    let artist_id = record_id(artist_id, "artist")?;

    let outcome = match submitted_fields(form).and_then(|f| parse_artist(&f)) {
        Ok(artist) => db::artists::update_artist(&state.db, artist_id, &artist).await,
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        warn!("Artist {} not updated: {}", artist_id, e);
    } else {
        info!("Updated artist {}", artist_id);
    }

    Ok(Redirect::to(&format!("/artists/{}", artist_id)))
}
