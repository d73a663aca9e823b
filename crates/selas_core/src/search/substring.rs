//! Case-insensitive substring search across the three catalogs.
//!
//! # Invariants
//! - Results list matching foods, then weekdays, then months, each in
//!   catalog order. No ranking.
//! - An empty query matches every item.
//! - Search is pure; it never touches favorites state.

use crate::model::catalog::{CatalogEntry, CatalogItem, CatalogKind};
use log::trace;

/// Ordered search hits across all catalogs.
pub type SearchResult = Vec<CatalogItem>;

/// Returns every item whose display name contains `query`, ignoring case.
///
/// Cost is one linear scan over all three catalogs, cheap enough to run on
/// every keystroke.
pub fn search(
    query: &str,
    foods: &[CatalogEntry],
    weekdays: &[CatalogEntry],
    months: &[CatalogEntry],
) -> SearchResult {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();
    collect_matches(&needle, CatalogKind::Food, foods, &mut hits);
    collect_matches(&needle, CatalogKind::Weekday, weekdays, &mut hits);
    collect_matches(&needle, CatalogKind::Month, months, &mut hits);

    // Query text is user input; log its size only.
    trace!(
        "event=catalog_search module=search status=ok query_chars={} hits={}",
        query.chars().count(),
        hits.len()
    );
    hits
}

/// Same as [`search`], treating an absent query as the empty string.
pub fn search_optional(
    query: Option<&str>,
    foods: &[CatalogEntry],
    weekdays: &[CatalogEntry],
    months: &[CatalogEntry],
) -> SearchResult {
    search(query.unwrap_or_default(), foods, weekdays, months)
}

fn collect_matches(
    needle: &str,
    kind: CatalogKind,
    entries: &[CatalogEntry],
    hits: &mut SearchResult,
) {
    hits.extend(
        entries
            .iter()
            .filter(|entry| matches_name(needle, &entry.display_name))
            .cloned()
            .map(|entry| CatalogItem::new(kind, entry)),
    );
}

fn matches_name(lowercase_needle: &str, display_name: &str) -> bool {
    lowercase_needle.is_empty() || display_name.to_lowercase().contains(lowercase_needle)
}
