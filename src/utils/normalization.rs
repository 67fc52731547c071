//! Normalization Utilities
//!
//! Converts display names and user queries into a shared matching form:
//! case-folded, NFD-decomposed, with combining diacritical marks removed.
//! "José" and "jose" normalize to the same key, so accented and unaccented
//! spellings match each other in either direction.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search matching.
///
/// Case-folds, decomposes to NFD, and drops combining marks. Applied to
/// every guest name at load time (producing `search_key`) and to every
/// query at lookup time, so both sides of a comparison share one form.
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_for_search(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// True when `value` starts with `query`, ignoring case and diacritics.
///
/// Used by search ordering (prefix matches sort first) and exposed for
/// callers implementing single-match auto-selection.
pub fn starts_with_ignoring_accents(value: &str, query: &str) -> bool {
    normalize_for_search(value).starts_with(&normalize_for_search(query.trim()))
}

/// Build a stable identifier slug from arbitrary text.
///
/// Lower-cases, strips diacritics, collapses every run of
/// non-alphanumeric characters to a single hyphen, and trims leading and
/// trailing hyphens. `"José Pérez-5"` becomes `"jose-perez-5"`.
pub fn slugify(value: &str) -> String {
    let normalized = normalize_for_search(value.trim());
    let mut slug = String::with_capacity(normalized.len());
    let mut pending_separator = false;

    for ch in normalized.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}
