//! Tag normalization rules.
//!
//! # Responsibility
//! - Turn raw comma-separated tag input into canonical tokens.
//!
//! # Invariants
//! - Output tokens are lowercase and contain no internal whitespace.
//! - Token order follows input order; duplicates are kept as given.
//! - Normalization is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes one raw tag token.
///
/// Trims surrounding whitespace, collapses every internal whitespace run to
/// a single hyphen, and lowercases the result. Returns `None` when the token
/// is empty after trimming.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let hyphenated = WHITESPACE_RUN_RE.replace_all(trimmed, "-");
    Some(hyphenated.to_lowercase())
}

/// Normalizes a raw comma-separated tag string into canonical tokens.
///
/// Empty tokens are dropped; everything else is kept in input order without
/// de-duplication.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_tag).collect()
}
