//! Venue queries

use chrono::{NaiveDate, NaiveDateTime};
use fyyur_common::dates::partition_shows;
use fyyur_common::db::{NewVenue, Venue};
use fyyur_common::genres::{join_genres, split_genres};
use fyyur_common::{Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use super::{upcoming_count_sql, NamedRecord, SearchResults, UpcomingSummary};

/// Venues sharing a city and state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Area {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<UpcomingSummary>,
}

/// A show as listed on a venue page
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Venue page view model
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(sqlx::FromRow)]
struct AreaRow {
    id: i64,
    name: String,
    city: Option<String>,
    state: Option<String>,
    num_upcoming_shows: i64,
}

/// All venues grouped by (state, city), both ascending; venues by name within an area
pub async fn list_areas(pool: &SqlitePool, today: NaiveDate) -> Result<Vec<Area>> {
    let sql = format!(
        "SELECT owner.id, owner.name, owner.city, owner.state, {} AS num_upcoming_shows
         FROM venue owner
         ORDER BY owner.state, owner.city, owner.name",
        upcoming_count_sql("venue_id")
    );
    let rows: Vec<AreaRow> = sqlx::query_as(&sql).bind(today).fetch_all(pool).await?;

    let mut areas: Vec<Area> = Vec::new();
    for row in rows {
        let summary = UpcomingSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas.last_mut() {
            Some(area) if area.city == row.city && area.state == row.state => {
                area.venues.push(summary)
            }
            _ => areas.push(Area {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    Ok(areas)
}

pub async fn list_venue_names(pool: &SqlitePool) -> Result<Vec<NamedRecord>> {
    Ok(sqlx::query_as("SELECT id, name FROM venue ORDER BY name")
        .fetch_all(pool)
        .await?)
}

/// Venues whose name matches `term`
pub async fn search(pool: &SqlitePool, term: &str, today: NaiveDate) -> Result<SearchResults> {
    let sql = format!(
        "SELECT owner.id, owner.name, {} AS num_upcoming_shows FROM venue owner ORDER BY owner.name",
        upcoming_count_sql("venue_id")
    );
    let candidates: Vec<UpcomingSummary> =
        sqlx::query_as(&sql).bind(today).fetch_all(pool).await?;

    Ok(SearchResults::filter(term, candidates))
}

pub async fn get_venue(pool: &SqlitePool, venue_id: i64) -> Result<Option<Venue>> {
    Ok(sqlx::query_as("SELECT * FROM venue WHERE id = ?")
        .bind(venue_id)
        .fetch_optional(pool)
        .await?)
}

/// Venue page data, `None` for an unknown id
pub async fn venue_detail(
    pool: &SqlitePool,
    venue_id: i64,
    today: NaiveDate,
) -> Result<Option<VenueDetail>> {
    let Some(venue) = get_venue(pool, venue_id).await? else {
        return Ok(None);
    };

    let shows: Vec<VenueShow> = sqlx::query_as(
        r#"
        SELECT a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM show s
        JOIN artist a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    let (past_shows, upcoming_shows) = partition_shows(shows, today, |s| s.start_time);

    Ok(Some(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: split_genres(venue.genres.as_deref()),
        city: venue.city,
        state: venue.state,
        address: venue.address,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

/// Insert a venue, returning its id
pub async fn create_venue(pool: &SqlitePool, venue: &NewVenue) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO venue (name, genres, city, state, address, phone, image_link,
                           facebook_link, website, seeking_talent, seeking_description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&venue.name)
    .bind(join_genres(&venue.genres))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(id)
}

/// Overwrite every editable field of a venue
pub async fn update_venue(pool: &SqlitePool, venue_id: i64, venue: &NewVenue) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venue
        SET name = ?, genres = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, website = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(join_genres(&venue.genres))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(venue_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", venue_id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue together with its shows, returning the venue name
pub async fn delete_venue(pool: &SqlitePool, venue_id: i64) -> Result<String> {
    let mut tx = pool.begin().await?;

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM venue WHERE id = ?")
        .bind(venue_id)
        .fetch_optional(&mut *tx)
        .await?;
    let name = name.ok_or_else(|| Error::NotFound(format!("venue {}", venue_id)))?;

    sqlx::query("DELETE FROM show WHERE venue_id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM venue WHERE id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(name)
}
