//! Artist queries

use chrono::{NaiveDate, NaiveDateTime};
use fyyur_common::dates::partition_shows;
use fyyur_common::db::{Artist, NewArtist};
use fyyur_common::genres::{join_genres, split_genres};
use fyyur_common::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use super::{upcoming_count_sql, NamedRecord, SearchResults, UpcomingSummary};

/// A show as listed on an artist page
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Artist page view model
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<NamedRecord>> {
    Ok(sqlx::query_as("SELECT id, name FROM artist ORDER BY name")
        .fetch_all(pool)
        .await?)
}

/// Artists whose name matches `term`
pub async fn search(pool: &SqlitePool, term: &str, today: NaiveDate) -> Result<SearchResults> {
    let sql = format!(
        "SELECT owner.id, owner.name, {} AS num_upcoming_shows FROM artist owner ORDER BY owner.name",
        upcoming_count_sql("artist_id")
    );
    let candidates: Vec<UpcomingSummary> =
        sqlx::query_as(&sql).bind(today).fetch_all(pool).await?;

    Ok(SearchResults::filter(term, candidates))
}

pub async fn get_artist(pool: &SqlitePool, artist_id: i64) -> Result<Option<Artist>> {
    Ok(sqlx::query_as("SELECT * FROM artist WHERE id = ?")
        .bind(artist_id)
        .fetch_optional(pool)
        .await?)
}

/// Artist page data, `None` for an unknown id
pub async fn artist_detail(
    pool: &SqlitePool,
    artist_id: i64,
    today: NaiveDate,
) -> Result<Option<ArtistDetail>> {
    let Some(artist) = get_artist(pool, artist_id).await? else {
        return Ok(None);
    };

    let shows: Vec<ArtistShow> = sqlx::query_as(
        r#"
        SELECT v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
               s.start_time
        FROM show s
        JOIN venue v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    let (past_shows, upcoming_shows) = partition_shows(shows, today, |s| s.start_time);

    Ok(Some(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: split_genres(artist.genres.as_deref()),
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Insert an artist, returning its id
pub async fn create_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO artist (name, genres, city, state, phone, image_link, facebook_link,
                            website, seeking_venue, seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&artist.name)
    .bind(join_genres(&artist.genres))
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(id)
}

/// Overwrite every editable field of an artist
pub async fn update_artist(pool: &SqlitePool, artist_id: i64, artist: &NewArtist) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artist
        SET name = ?, genres = ?, city = ?, state = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(join_genres(&artist.genres))
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", artist_id)));
    }

    tx.commit().await?;
    Ok(())
}
