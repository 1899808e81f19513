//! # Text Processing Utilities
//!
//! Normalisation and matching used by the navigation filter. Matching is a
//! plain case-insensitive substring test; there is deliberately no scoring.

/// Normalises free text for matching: surrounding whitespace removed and
/// Unicode-lowercased (so Cyrillic labels fold the same way Latin ones do).
///
/// # Example
/// ```rust
/// use navfilter_util::normalize_query;
///
/// assert_eq!(normalize_query("  Алерти "), "алерти");
/// assert_eq!(normalize_query("\t\n"), "");
/// ```
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns `true` when `text` contains an already-normalised `query`.
///
/// The haystack is normalised here; callers normalise the query once per
/// filter pass rather than once per item.
pub fn matches_query(text: &str, normalized_query: &str) -> bool {
    normalize_query(text).contains(normalized_query)
}
