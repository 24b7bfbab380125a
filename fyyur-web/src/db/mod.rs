//! Queries behind the venue, artist and show pages
//!
//! Every function takes the pool and, where past/upcoming matters, the date
//! to treat as today. Writes run in a transaction that is rolled back when
//! the function returns early with an error.

use fyyur_common::search::matches_search;
use serde::Serialize;

pub mod artists;
pub mod shows;
pub mod venues;

/// SQL fragment counting upcoming shows for the row aliased `owner`;
/// bind today's date once per use.
pub(crate) fn upcoming_count_sql(owner_column: &str) -> String {
    format!(
        "(SELECT COUNT(*) FROM show s WHERE s.{} = owner.id AND date(s.start_time) > date(?))",
        owner_column
    )
}

/// Id and display name, for plain lists and select boxes
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

/// Name plus upcoming-show count, as shown in lists and search results
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct UpcomingSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search page payload
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<UpcomingSummary>,
}

impl SearchResults {
    /// Keep the candidates whose name matches `term`
    pub fn filter(term: &str, candidates: Vec<UpcomingSummary>) -> Self {
        let data: Vec<UpcomingSummary> = candidates
            .into_iter()
            .filter(|c| matches_search(term, &c.name))
            .collect();
        Self {
            count: data.len(),
            data,
        }
    }
}
