//! Demo data for a fresh database (`fyyur-web --seed`)

use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

struct SeedVenue {
    name: &'static str,
    genres: &'static str,
    city: &'static str,
    state: &'static str,
    address: &'static str,
    phone: &'static str,
    website: Option<&'static str>,
    facebook_link: Option<&'static str>,
    seeking_talent: bool,
    seeking_description: Option<&'static str>,
}

struct SeedArtist {
    name: &'static str,
    genres: &'static str,
    city: &'static str,
    state: &'static str,
    phone: &'static str,
    facebook_link: Option<&'static str>,
    seeking_venue: bool,
    seeking_description: Option<&'static str>,
}

const VENUES: &[SeedVenue] = &[
    SeedVenue {
        name: "The Musical Hop",
        genres: "Jazz,Reggae,Classical,Folk",
        city: "San Francisco",
        state: "CA",
        address: "1015 Folsom Street",
        phone: "123-123-1234",
        website: Some("https://www.themusicalhop.com"),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop"),
        seeking_talent: true,
        seeking_description: Some(
            "We are on the lookout for a local artist to play every two weeks. Please call us.",
        ),
    },
    SeedVenue {
        name: "The Dueling Pianos Bar",
        genres: "Classical,R&B,Hip-Hop",
        city: "New York",
        state: "NY",
        address: "335 Delancey Street",
        phone: "914-003-1132",
        website: Some("https://www.theduelingpianos.com"),
        facebook_link: Some("https://www.facebook.com/theduelingpianos"),
        seeking_talent: false,
        seeking_description: None,
    },
    SeedVenue {
        name: "Park Square Live Music & Coffee",
        genres: "Rock n Roll,Jazz,Classical,Folk",
        city: "San Francisco",
        state: "CA",
        address: "34 Whiskey Moore Ave",
        phone: "415-000-1234",
        website: Some("https://www.parksquarelivemusicandcoffee.com"),
        facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee"),
        seeking_talent: false,
        seeking_description: None,
    },
];

const ARTISTS: &[SeedArtist] = &[
    SeedArtist {
        name: "Guns N Petals",
        genres: "Rock n Roll",
        city: "San Francisco",
        state: "CA",
        phone: "326-123-5000",
        facebook_link: Some("https://www.facebook.com/GunsNPetals"),
        seeking_venue: true,
        seeking_description: Some(
            "Looking for shows to perform at in the San Francisco Bay Area!",
        ),
    },
    SeedArtist {
        name: "Matt Quevedo",
        genres: "Jazz",
        city: "New York",
        state: "NY",
        phone: "300-400-5000",
        facebook_link: Some("https://www.facebook.com/mattquevedo923251523"),
        seeking_venue: false,
        seeking_description: None,
    },
    SeedArtist {
        name: "The Wild Sax Band",
        genres: "Jazz,Classical",
        city: "San Francisco",
        state: "CA",
        phone: "432-325-5432",
        facebook_link: None,
        seeking_venue: false,
        seeking_description: None,
    },
];

/// (venue index, artist index, start time)
const SHOWS: &[(usize, usize, &str)] = &[
    (0, 0, "2019-05-21 21:30:00"),
    (2, 1, "2019-06-15 23:00:00"),
    (2, 2, "2035-04-01 20:00:00"),
    (2, 2, "2035-04-08 20:00:00"),
    (2, 2, "2035-04-15 20:00:00"),
];

/// Insert the demo venues, artists and shows into an empty database
///
/// Returns `false` without touching anything when a venue already exists.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venue")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Database already has {} venues, skipping demo data", existing);
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut venue_ids = Vec::with_capacity(VENUES.len());
    for v in VENUES {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO venue (name, genres, city, state, address, phone, website,
                               facebook_link, seeking_talent, seeking_description)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(v.name)
        .bind(v.genres)
        .bind(v.city)
        .bind(v.state)
        .bind(v.address)
        .bind(v.phone)
        .bind(v.website)
        .bind(v.facebook_link)
        .bind(v.seeking_talent)
        .bind(v.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        venue_ids.push(id);
    }

    let mut artist_ids = Vec::with_capacity(ARTISTS.len());
    for a in ARTISTS {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO artist (name, genres, city, state, phone, facebook_link,
                                seeking_venue, seeking_description)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(a.name)
        .bind(a.genres)
        .bind(a.city)
        .bind(a.state)
        .bind(a.phone)
        .bind(a.facebook_link)
        .bind(a.seeking_venue)
        .bind(a.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        artist_ids.push(id);
    }

    for (venue, artist, start_time) in SHOWS {
        sqlx::query("INSERT INTO show (start_time, artist_id, venue_id) VALUES (?, ?, ?)")
            .bind(start_time)
            .bind(artist_ids[*artist])
            .bind(venue_ids[*venue])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        "Seeded demo data: {} venues, {} artists, {} shows",
        VENUES.len(),
        ARTISTS.len(),
        SHOWS.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genres::{is_known_genre, is_known_state, split_genres};

    #[test]
    fn test_seeded_genres_and_states_are_form_choices() {
        let venues = VENUES.iter().map(|v| (v.name, v.genres, v.state));
        let artists = ARTISTS.iter().map(|a| (a.name, a.genres, a.state));

        for (name, genres, state) in venues.chain(artists) {
            assert!(is_known_state(state), "{}: unknown state {}", name, state);
            for genre in split_genres(Some(genres)) {
                assert!(is_known_genre(&genre), "{}: unknown genre {}", name, genre);
            }
        }
    }
}
