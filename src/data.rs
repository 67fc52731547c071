//! Guest List Loading
//!
//! Turns the raw delimited guest list export into validated
//! [`GuestRecord`]s: locates the header row, filters to attending guests,
//! derives display names, table labels, meal descriptions, and slug ids.
//!
//! The loader runs once at boot. Its output is final; nothing mutates a
//! record after this module returns it.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::csv;
use crate::error::LoadError;
use crate::menu::MenuCatalog;
use crate::utils::normalization::{normalize_for_search, slugify};

/// Sentinel table label for guests without a seat assignment yet.
pub const TABLE_TBD: &str = "TBD";

/// Column labels of the guest list export.
///
/// Exact labels are a configuration concern; the defaults match the
/// published spreadsheet export.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub name: String,
    pub attending: String,
    pub table: String,
    pub appetizer: String,
    pub main_course: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            attending: "Attending".to_string(),
            table: "Table".to_string(),
            appetizer: "Meal -- Appetizer".to_string(),
            main_course: "Meal -- Main course".to_string(),
        }
    }
}

/// Loader configuration: column labels plus the meal catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub columns: Columns,
    pub menu: MenuCatalog,
}

impl LoaderConfig {
    /// Load configuration overrides from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        serde_json::from_str(&contents).with_context(|| "Failed to parse config JSON")
    }
}

/// One attending guest, immutable after load.
#[derive(Debug, Clone, Serialize)]
pub struct GuestRecord {
    /// Slug of name + table. Stable across reloads, uniqueness
    /// best-effort (two same-name guests at one table collide).
    pub id: String,
    /// Display name, trimmed, "+1" suffix stripped.
    pub name: String,
    /// Case-folded, diacritic-stripped form of `name`, used only for
    /// matching.
    pub search_key: String,
    /// Table label, or [`TABLE_TBD`] when unassigned.
    pub table: String,
    pub appetizer_code: String,
    pub main_course_code: String,
    pub appetizer_description: String,
    pub main_course_description: String,
}

/// Parse raw guest list text into attending [`GuestRecord`]s.
///
/// Record order matches first appearance in the source. Rows that are
/// not attending or have no usable name are silently excluded; exclusion
/// totals are logged at debug level. Duplicate ids are not deduplicated.
pub fn parse_guest_list(text: &str, config: &LoaderConfig) -> Result<Vec<GuestRecord>, LoadError> {
    let rows = csv::parse(text);

    let header_index = rows
        .iter()
        .position(|row| row.iter().any(|cell| cell.trim() == config.columns.name))
        .ok_or(LoadError::MissingHeader)?;

    let header: Vec<String> = rows[header_index]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let mut guests = Vec::new();
    let mut not_attending = 0usize;
    let mut unnamed = 0usize;

    for row in &rows[header_index + 1..] {
        // Missing trailing cells read as empty
        let record: HashMap<&str, &str> = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_str(), row.get(i).map(|v| v.trim()).unwrap_or("")))
            .collect();

        let field = |label: &str| record.get(label).copied().unwrap_or("");

        if field(&config.columns.attending).to_lowercase() != "yes" {
            not_attending += 1;
            continue;
        }

        let name = strip_plus_one(field(&config.columns.name));
        if name.is_empty() {
            unnamed += 1;
            continue;
        }

        let table = match field(&config.columns.table) {
            "" => TABLE_TBD.to_string(),
            value => value.to_string(),
        };

        let appetizer_code = field(&config.columns.appetizer).to_string();
        let main_course_code = field(&config.columns.main_course).to_string();

        guests.push(GuestRecord {
            id: slugify(&format!("{}-{}", name, table)),
            search_key: normalize_for_search(name),
            name: name.to_string(),
            appetizer_description: config.menu.describe_appetizer(&appetizer_code),
            main_course_description: config.menu.describe_main_course(&main_course_code),
            table,
            appetizer_code,
            main_course_code,
        });
    }

    tracing::debug!(not_attending, unnamed, "rows excluded during guest list load");

    if guests.is_empty() {
        return Err(LoadError::EmptyDirectory);
    }

    tracing::info!(guests = guests.len(), "guest list loaded");
    Ok(guests)
}

/// Read and parse the guest list from a file.
///
/// The one asynchronous step of the session: a read failure surfaces as
/// [`LoadError::DataSourceUnavailable`]. No retry, no timeout.
pub async fn load_guest_list(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<Vec<GuestRecord>, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| LoadError::DataSourceUnavailable(format!("{}: {}", path.display(), err)))?;

    parse_guest_list(&text, config)
}

/// Strip a trailing `+1` token (preceded by whitespace) from a name.
fn strip_plus_one(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_suffix("+1") {
        Some(head) if head.ends_with(char::is_whitespace) => head.trim_end(),
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<Vec<GuestRecord>, LoadError> {
        parse_guest_list(text, &LoaderConfig::default())
    }

    #[test]
    fn test_accented_guest_end_to_end() {
        let guests = load("Name,Attending,Table\r\nJosé Pérez,Yes,5\r\n").unwrap();
        assert_eq!(guests.len(), 1);

        let guest = &guests[0];
        assert_eq!(guest.name, "José Pérez");
        assert_eq!(guest.table, "5");
        assert_eq!(guest.search_key, "jose perez");
        assert_eq!(guest.id, "jose-perez-5");
        assert_eq!(guest.appetizer_description, crate::menu::CHEFS_CHOICE);
    }

    #[test]
    fn test_non_attending_rows_are_excluded() {
        let guests =
            load("Name,Attending,Table\nAna,Yes,1\nBen,No,1\nCleo,,1\nDrew,YES,2\n").unwrap();
        let names: Vec<&str> = guests.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Drew"]);
    }

    #[test]
    fn test_plus_one_suffix_is_stripped() {
        let guests = load("Name,Attending\nAna Smith +1,Yes\nBen+1,Yes\n").unwrap();
        assert_eq!(guests[0].name, "Ana Smith");
        // No whitespace before the token means it is part of the name
        assert_eq!(guests[1].name, "Ben+1");
    }

    #[test]
    fn test_empty_name_rows_are_excluded() {
        let guests = load("Name,Attending\n  ,Yes\nAna,Yes\n").unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Ana");
    }

    #[test]
    fn test_missing_table_falls_back_to_tbd() {
        let guests = load("Name,Attending,Table\nAna,Yes,\nBen,Yes\n").unwrap();
        assert_eq!(guests[0].table, TABLE_TBD);
        // Trailing cell absent entirely, not just empty
        assert_eq!(guests[1].table, TABLE_TBD);
        assert_eq!(guests[0].id, "ana-tbd");
    }

    #[test]
    fn test_meal_codes_resolve_at_load_time() {
        let guests =
            load("Name,Attending,Meal -- Appetizer,Meal -- Main course\nAna,Yes,soup,mystery\n")
                .unwrap();
        assert_eq!(guests[0].appetizer_code, "soup");
        assert_eq!(guests[0].appetizer_description, "Parsnip and pear velouté");
        // Unknown code passes through
        assert_eq!(guests[0].main_course_description, "mystery");
    }

    #[test]
    fn test_header_may_be_preceded_by_junk_rows() {
        let guests = load("Wedding guests,,\nexported 2024,,\nName,Attending\nAna,Yes\n").unwrap();
        assert_eq!(guests.len(), 1);
    }

    #[test]
    fn test_missing_header_is_fatal() {
        let err = load("Guest,Coming\nAna,Yes\n").unwrap_err();
        assert_eq!(err, LoadError::MissingHeader);
    }

    #[test]
    fn test_header_only_input_is_an_empty_directory() {
        let err = load("Name,Attending,Table\n").unwrap_err();
        assert_eq!(err, LoadError::EmptyDirectory);
    }

    #[test]
    fn test_all_rows_filtered_out_is_an_empty_directory() {
        let err = load("Name,Attending\nAna,No\nBen,maybe\n").unwrap_err();
        assert_eq!(err, LoadError::EmptyDirectory);
    }

    #[test]
    fn test_custom_column_labels() {
        let config = LoaderConfig {
            columns: Columns {
                name: "Guest".to_string(),
                attending: "RSVP".to_string(),
                ..Columns::default()
            },
            ..LoaderConfig::default()
        };
        let guests = parse_guest_list("Guest,RSVP\nAna,yes\n", &config).unwrap();
        assert_eq!(guests[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_unreadable_source_is_unavailable() {
        let err = load_guest_list("/nonexistent/guests.csv", &LoaderConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::DataSourceUnavailable(_)));
    }
}
