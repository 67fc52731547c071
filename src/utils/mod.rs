//! Utility modules for guest lookup
//!
//! Contains shared functionality used by the loader and the search index:
//! - Normalization: case folding and diacritic stripping for matching
//! - Slugs: stable identifiers derived from guest name and table

pub mod normalization;

// Re-export commonly used functions
pub use normalization::{normalize_for_search, slugify, starts_with_ignoring_accents};
