//! Seatfinder — wedding guest seating lookup core
//!
//! Loads a published guest list export once at boot, builds read-only
//! lookup structures, and answers name and tablemate queries for the
//! rest of the session:
//! - `csv`: single-pass delimited-text scanner
//! - `data`: header resolution, row filtering, record derivation
//! - `directory`: search index, tablemate groups, session lifecycle
//! - `menu`: meal code → description catalog
//! - `utils/`: case and diacritic normalization, slug ids
//!
//! Rendering, splash timing, and result truncation belong to the
//! presentation layer, which consumes this crate.

pub mod csv;
pub mod data;
pub mod directory;
pub mod error;
pub mod menu;
pub mod utils;

// Re-export commonly used types
pub use data::{load_guest_list, parse_guest_list, Columns, GuestRecord, LoaderConfig, TABLE_TBD};
pub use directory::{GuestDirectory, Session, SessionPhase};
pub use error::LoadError;
pub use menu::MenuCatalog;
pub use utils::normalization::{normalize_for_search, slugify, starts_with_ignoring_accents};
