//! Embedded Tera templates and the `datetime` filter

use std::collections::HashMap;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::error::PageResult;

/// (name, source) for every template compiled into the binary
const TEMPLATES: &[(&str, &str)] = &[
    ("layouts/main.html", include_str!("../templates/layouts/main.html")),
    ("pages/home.html", include_str!("../templates/pages/home.html")),
    ("pages/venues.html", include_str!("../templates/pages/venues.html")),
    ("pages/artists.html", include_str!("../templates/pages/artists.html")),
    ("pages/shows.html", include_str!("../templates/pages/shows.html")),
    ("pages/search_venues.html", include_str!("../templates/pages/search_venues.html")),
    ("pages/search_artists.html", include_str!("../templates/pages/search_artists.html")),
    ("pages/show_venue.html", include_str!("../templates/pages/show_venue.html")),
    ("pages/show_artist.html", include_str!("../templates/pages/show_artist.html")),
    ("forms/venue_fields.html", include_str!("../templates/forms/venue_fields.html")),
    ("forms/artist_fields.html", include_str!("../templates/forms/artist_fields.html")),
    ("forms/new_venue.html", include_str!("../templates/forms/new_venue.html")),
    ("forms/edit_venue.html", include_str!("../templates/forms/edit_venue.html")),
    ("forms/new_artist.html", include_str!("../templates/forms/new_artist.html")),
    ("forms/edit_artist.html", include_str!("../templates/forms/edit_artist.html")),
    ("forms/new_show.html", include_str!("../templates/forms/new_show.html")),
];

/// Compile all page templates and register filters
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    tera.register_filter("datetime", datetime_filter);
    Ok(tera)
}

/// `{{ show.start_time | datetime(format="full") }}`, format defaults to `medium`
fn datetime_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("datetime filter expects a string, got {}", value)))?;
    let format = args
        .get("format")
        .and_then(Value::as_str)
        .unwrap_or("medium");

    fyyur_common::dates::format_datetime_str(text, format)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(e.to_string()))
}

/// Outcome message shown once at the top of the next page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Flash {
    /// `success` or `danger`, used as the alert style
    pub kind: &'static str,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "danger",
            message: message.into(),
        }
    }
}

/// Context with the keys the layout always reads
pub fn page_context(search_target: &str) -> Context {
    let mut context = Context::new();
    context.insert("flash", &Option::<Flash>::None);
    context.insert("search_target", search_target);
    context
}

/// Render a template to an HTML response
pub fn render(tera: &Tera, name: &str, context: &Context) -> PageResult<Html<String>> {
    Ok(Html(tera.render(name, context)?))
}
