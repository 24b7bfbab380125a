//! Form parsing and validation
//!
//! Forms arrive URL-encoded and are extracted as raw `(key, value)` pairs so
//! repeated keys survive: a multi-select posts `genres=Jazz&genres=Folk`.

use fyyur_common::dates::{parse_start_time, STORAGE_FORMAT};
use fyyur_common::db::{Artist, NewArtist, NewShow, NewVenue, Venue};
use fyyur_common::genres::{is_known_genre, is_known_state, split_genres};
use fyyur_common::{Error, Result};
use serde::Serialize;

/// Submitted form fields in arrival order
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First non-blank value for `key`, trimmed
    pub fn text(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Every non-blank value for `key`, trimmed, in order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox state; WTForms-style `y` as well as the browser default `on`
    pub fn checkbox(&self, key: &str) -> bool {
        self.text(key)
            .map(|v| matches!(v.to_lowercase().as_str(), "y" | "yes" | "on" | "true" | "1"))
            .unwrap_or(false)
    }

    fn required(&self, key: &str) -> Result<String> {
        self.text(key)
            .ok_or_else(|| Error::InvalidInput(format!("{} is required", key)))
    }

    fn optional_url(&self, key: &str) -> Result<Option<String>> {
        match self.text(key) {
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => Err(
                Error::InvalidInput(format!("{} must be an http(s) URL", key)),
            ),
            other => Ok(other),
        }
    }

    fn state(&self) -> Result<String> {
        let state = self.required("state")?;
        if !is_known_state(&state) {
            return Err(Error::InvalidInput(format!("Unknown state: {}", state)));
        }
        Ok(state)
    }

    fn genres(&self) -> Result<Vec<String>> {
        let genres = self.all("genres");
        if genres.is_empty() {
            return Err(Error::InvalidInput("genres is required".to_string()));
        }
        if let Some(unknown) = genres.iter().find(|g| !is_known_genre(g)) {
            return Err(Error::InvalidInput(format!("Unknown genre: {}", unknown)));
        }
        Ok(genres)
    }

    fn id(&self, key: &str) -> Result<i64> {
        let raw = self.required(key)?;
        raw.parse()
            .map_err(|_| Error::InvalidInput(format!("{} must be a number, got {:?}", key, raw)))
    }
}

/// Validate the venue create/edit form
pub fn parse_venue(fields: &FormFields) -> Result<NewVenue> {
    Ok(NewVenue {
        name: fields.required("name")?,
        genres: fields.genres()?,
        city: fields.required("city")?,
        state: fields.state()?,
        address: fields.required("address")?,
        phone: fields.text("phone"),
        image_link: fields.optional_url("image_link")?,
        facebook_link: fields.optional_url("facebook_link")?,
        website: fields.optional_url("website")?,
        seeking_talent: fields.checkbox("seeking_talent"),
        seeking_description: fields.text("seeking_description"),
    })
}

/// Validate the artist create/edit form
pub fn parse_artist(fields: &FormFields) -> Result<NewArtist> {
    Ok(NewArtist {
        name: fields.required("name")?,
        genres: fields.genres()?,
        city: fields.required("city")?,
        state: fields.state()?,
        phone: fields.text("phone"),
        image_link: fields.optional_url("image_link")?,
        facebook_link: fields.optional_url("facebook_link")?,
        website: fields.optional_url("website")?,
        seeking_venue: fields.checkbox("seeking_venue"),
        seeking_description: fields.text("seeking_description"),
    })
}

/// Validate the show form
pub fn parse_show(fields: &FormFields) -> Result<NewShow> {
    Ok(NewShow {
        artist_id: fields.id("artist_id")?,
        venue_id: fields.id("venue_id")?,
        start_time: parse_start_time(&fields.required("start_time")?)?,
    })
}

/// Values used to fill the venue form; blank strings for missing fields
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VenueFormValues {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl From<&Venue> for VenueFormValues {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            genres: split_genres(venue.genres.as_deref()),
            city: venue.city.clone().unwrap_or_default(),
            state: venue.state.clone().unwrap_or_default(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Values used to fill the artist form
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ArtistFormValues {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl From<&Artist> for ArtistFormValues {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            genres: split_genres(artist.genres.as_deref()),
            city: artist.city.clone().unwrap_or_default(),
            state: artist.state.clone().unwrap_or_default(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

/// Default start time offered by the show form
pub fn default_start_time() -> String {
    fyyur_common::dates::now().format(STORAGE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn venue_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", " The Musical Hop "),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Folk"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("image_link", ""),
            ("seeking_talent", "y"),
        ]
    }

    #[test]
    fn test_parse_venue_collects_repeated_genres() {
        let venue = parse_venue(&fields(&venue_pairs())).unwrap();

        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres, vec!["Jazz", "Folk"]);
        assert_eq!(venue.image_link, None);
        assert!(venue.seeking_talent);
        assert_eq!(venue.seeking_description, None);
    }

    #[test]
    fn test_parse_venue_requires_name() {
        let mut pairs = venue_pairs();
        pairs.retain(|(k, _)| *k != "name");
        pairs.push(("name", "   "));

        let err = parse_venue(&fields(&pairs)).unwrap_err();
        assert!(err.to_string().contains("name is required"));
    }

    #[test]
    fn test_parse_venue_rejects_unknown_state_and_genre() {
        let mut pairs = venue_pairs();
        pairs.retain(|(k, _)| *k != "state");
        pairs.push(("state", "ZZ"));
        assert!(parse_venue(&fields(&pairs)).is_err());

        let mut pairs = venue_pairs();
        pairs.push(("genres", "Polka"));
        let err = parse_venue(&fields(&pairs)).unwrap_err();
        assert!(err.to_string().contains("Polka"));
    }

    #[test]
    fn test_parse_venue_rejects_non_http_link() {
        let mut pairs = venue_pairs();
        pairs.push(("website", "ftp://example.com"));
        assert!(parse_venue(&fields(&pairs)).is_err());
    }

    #[test]
    fn test_checkbox_absent_is_false() {
        let artist = parse_artist(&fields(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
        ]))
        .unwrap();

        assert!(!artist.seeking_venue);
        assert_eq!(artist.phone, None);
    }

    #[test]
    fn test_form_values_from_venue() {
        let venue = Venue {
            id: 7,
            name: "The Dueling Pianos Bar".to_string(),
            genres: Some("Classical,R&B".to_string()),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        };

        let values = VenueFormValues::from(&venue);
        assert_eq!(values.genres, vec!["Classical", "R&B"]);
        assert_eq!(values.address, "");
        assert_eq!(values.state, "NY");
    }

    #[test]
    fn test_default_start_time_parses_back() {
        assert!(parse_start_time(&default_start_time()).is_ok());
    }

    #[test]
    fn test_parse_show() {
        let show = parse_show(&fields(&[
            ("artist_id", "4"),
            ("venue_id", " 1 "),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .unwrap();

        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_string(), "2035-04-01 20:00:00");
    }

    #[test]
    fn test_parse_show_rejects_bad_ids_and_times() {
        assert!(parse_show(&fields(&[
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .is_err());

        assert!(parse_show(&fields(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "whenever"),
        ]))
        .is_err());
    }
}
