//! fyyur-web library - venue, artist and show listings
//!
//! Page handlers map each route to a query, shape the rows into a view model
//! and render a Tera template. Form submissions run inside a transaction and
//! report the outcome as a flash message on the home page.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tera::Tera;

pub mod api;
pub mod db;
pub mod error;
pub mod forms;
pub mod templates;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Compiled page templates
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Create application state, compiling the embedded templates
    pub fn new(db: SqlitePool) -> Result<Self, tera::Error> {
        Ok(Self {
            db,
            templates: Arc::new(templates::load_templates()?),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    let venues = Router::new()
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::create_venue_form).post(api::venues::create_venue_submission),
        )
        .route(
            "/venues/:venue_id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(api::venues::edit_venue_form).post(api::venues::edit_venue_submission),
        );

    let artists = Router::new()
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::create_artist_form).post(api::artists::create_artist_submission),
        )
        .route("/artists/:artist_id", get(api::artists::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(api::artists::edit_artist_form).post(api::artists::edit_artist_submission),
        );

    let shows = Router::new()
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::create_show_form).post(api::shows::create_show_submission),
        );

    Router::new()
        .route("/", get(api::home::index))
        .route("/static/main.css", get(api::assets::serve_main_css))
        .merge(venues)
        .merge(artists)
        .merge(shows)
        .merge(api::health_routes())
        .fallback(api::home::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
