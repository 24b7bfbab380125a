//! HTTP handlers for fyyur-web

pub mod artists;
pub mod assets;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::extract::{
    rejection::{FormRejection, PathRejection},
    Path,
};
use axum::Form;
use serde::Deserialize;

use crate::error::{PageError, PageResult};
use crate::forms::FormFields;

pub use health::health_routes;

/// Search box form; a missing field searches for the empty string
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Numeric record id from the path; anything else is a 404 like an unknown id
pub(crate) fn record_id(path: Result<Path<i64>, PathRejection>, kind: &str) -> PageResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| PageError::NotFound(format!("{} id: {}", kind, rejection)))
}

/// Submitted form body; a wrong content type or undecodable body becomes an
/// input error so the handler reports it like any other rejected submission
pub(crate) fn submitted_fields(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> fyyur_common::Result<FormFields> {
    form.map(|Form(pairs)| FormFields::new(pairs))
        .map_err(|rejection| fyyur_common::Error::InvalidInput(rejection.body_text()))
}
