//! Name search used by the venue and artist search pages

/// Case-insensitive, bidirectional substring match
///
/// A name matches when the term occurs in it or it occurs in the term, so an
/// empty term matches every name.
pub fn matches_search(term: &str, name: &str) -> bool {
    let term = term.to_lowercase();
    let name = name.to_lowercase();
    name.contains(&term) || term.contains(&name)
}
