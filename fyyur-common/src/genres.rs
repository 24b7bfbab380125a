//! Genre and state choice lists, plus the comma-separated genre column codec

/// Genres offered by the venue and artist forms
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state codes offered by the venue and artist forms
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub fn is_known_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

pub fn is_known_state(state: &str) -> bool {
    STATES.contains(&state)
}

/// Split the stored genre column into display values
///
/// Entries are trimmed and empty entries dropped, so `None`, `""` and
/// `"Jazz, ,Folk"` are all handled.
pub fn split_genres(stored: Option<&str>) -> Vec<String> {
    stored
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join selected genres for storage
pub fn join_genres(genres: &[String]) -> String {
    genres.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_genres() {
        assert_eq!(
            split_genres(Some("Jazz,Reggae, Swing")),
            vec!["Jazz", "Reggae", "Swing"]
        );
        assert!(split_genres(None).is_empty());
        assert!(split_genres(Some("")).is_empty());
        assert_eq!(split_genres(Some("Folk,,")), vec!["Folk"]);
    }

    #[test]
    fn test_join_then_split() {
        let genres = vec!["R&B".to_string(), "Hip-Hop".to_string()];
        assert_eq!(join_genres(&genres), "R&B,Hip-Hop");
        assert_eq!(split_genres(Some(&join_genres(&genres))), genres);
    }

    #[test]
    fn test_choice_lists() {
        assert!(is_known_genre("Musical Theatre"));
        assert!(!is_known_genre("jazz"));
        assert!(is_known_state("CA"));
        assert!(!is_known_state("XX"));
        assert_eq!(STATES.len(), 51);
    }
}
