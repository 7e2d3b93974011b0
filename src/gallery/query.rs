//! Free-text narrowing of the gallery.
//!
//! Queries are case-folded and `-` and `_` are read as spaces, the same way
//! filter labels are written, so "machine-learn" and "Machine Learn" both find
//! a card tagged `machine-learning`.

/// Normalize user-entered search text for matching.
pub fn normalize_query(text: &str) -> String {
    text.to_lowercase().replace(['-', '_'], " ")
}

/// Searchable text of a card: its tags joined by spaces, with separators folded.
pub fn card_search_text<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = tags
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    normalize_query(&joined)
}

/// Whether `haystack` contains an already-normalized query.
pub fn matches(haystack: &str, normalized_query: &str) -> bool {
    normalize_query(haystack).contains(normalized_query)
}
