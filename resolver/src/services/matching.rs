//! Term normalization and string similarity for title matching.

use strsim::normalized_levenshtein;

/// Minimum similarity score (percent) a candidate must reach to be
/// reported as a match. A hard cutoff, not best-effort.
pub const SIMILARITY_THRESHOLD: f64 = 85.0;

/// Canonical form of a term for identity comparison and resource
/// identifier construction: lowercased, with spaces and hyphens mapped
/// to underscores and parentheses stripped. Everything else passes
/// through unchanged.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
        .replace('(', "")
        .replace(')', "")
}

/// Whether two strings denote the same entity after normalization.
/// This is the only path that yields an exact match.
pub fn terms_are_identical(a: &str, b: &str) -> bool {
    normalize_term(a) == normalize_term(b)
}

/// Normalized Levenshtein ratio between the lowercased forms, scaled
/// to 0-100.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}
