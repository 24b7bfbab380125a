//! Show queries

use chrono::NaiveDateTime;
use fyyur_common::db::NewShow;
use fyyur_common::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// A row of the /shows listing
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Every show, earliest first
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    Ok(sqlx::query_as(
        r#"
        SELECT v.id AS venue_id, v.name AS venue_name,
               a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM show s
        JOIN venue v ON v.id = s.venue_id
        JOIN artist a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?)
}

/// Insert a show, returning its id
///
/// An unknown artist or venue violates the foreign keys and is rolled back.
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO show (start_time, artist_id, venue_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(show.start_time)
    .bind(show.artist_id)
    .bind(show.venue_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(id)
}
