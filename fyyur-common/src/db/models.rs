//! Database models
//!
//! Row structs map one-to-one onto the `venue`, `artist` and `show` tables.
//! The `New*` structs carry validated form input for inserts and updates.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    /// Comma-separated, see [`crate::genres::split_genres`]
    pub genres: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub genres: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub artist_id: i64,
    pub venue_id: i64,
}

/// Venue fields accepted from the create/edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Artist fields accepted from the create/edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}
