//! Meal Catalog
//!
//! Resolves the short meal codes stored in the guest list export
//! (`soup`, `meat`, ...) to the descriptions shown to guests. The
//! catalog ships with the published menu and can be overridden from the
//! JSON config file for a different event.

use std::collections::HashMap;

use serde::Deserialize;

/// Description used when a guest has no recorded meal selection.
pub const CHEFS_CHOICE: &str = "Chef's choice";

/// Code → description lookup for both courses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuCatalog {
    pub appetizers: HashMap<String, String>,
    pub main_courses: HashMap<String, String>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        let appetizers = [
            ("soup", "Parsnip and pear velouté"),
            (
                "salad",
                "Yellow beet salad, snow goat cheese with herbs, Chioggia beets, hazelnuts",
            ),
            (
                "salmon",
                "Gravlax salmon with orange citrus gel, herbed labneh, pistachios and green oil",
            ),
        ];
        let main_courses = [
            (
                "meat",
                "Slow-cooked beef chuck, Yukon Gold mashed potatoes, forgotten root vegetables, and cooking jus",
            ),
            (
                "fish",
                "Slow-cooked salmon fillet, carrot purée, broccolini, tomato salsa and preserved lemon",
            ),
            (
                "vegetarian",
                "Roasted Eggplant Steak with Miso (vegan), Tahini, herbs, pomegranate and sesame",
            ),
        ];

        let to_map = |entries: &[(&str, &str)]| {
            entries
                .iter()
                .map(|(code, text)| (code.to_string(), text.to_string()))
                .collect()
        };

        Self {
            appetizers: to_map(&appetizers),
            main_courses: to_map(&main_courses),
        }
    }
}

impl MenuCatalog {
    pub fn describe_appetizer(&self, raw_code: &str) -> String {
        Self::describe(&self.appetizers, raw_code)
    }

    pub fn describe_main_course(&self, raw_code: &str) -> String {
        Self::describe(&self.main_courses, raw_code)
    }

    /// Resolve a raw meal code to its description.
    ///
    /// Empty codes become [`CHEFS_CHOICE`]; unrecognized codes pass
    /// through unchanged so a newly added menu code still renders
    /// something sensible before the catalog is updated.
    fn describe(lookup: &HashMap<String, String>, raw_code: &str) -> String {
        let key = raw_code.trim().to_lowercase();
        if key.is_empty() {
            return CHEFS_CHOICE.to_string();
        }

        lookup
            .get(&key)
            .cloned()
            .unwrap_or_else(|| raw_code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve_case_insensitively() {
        let menu = MenuCatalog::default();
        assert_eq!(menu.describe_appetizer("soup"), "Parsnip and pear velouté");
        assert_eq!(
            menu.describe_main_course(" FISH "),
            "Slow-cooked salmon fillet, carrot purée, broccolini, tomato salsa and preserved lemon"
        );
    }

    #[test]
    fn test_empty_code_is_chefs_choice() {
        let menu = MenuCatalog::default();
        assert_eq!(menu.describe_appetizer(""), CHEFS_CHOICE);
        assert_eq!(menu.describe_main_course("   "), CHEFS_CHOICE);
    }

    #[test]
    fn test_unknown_code_passes_through_unchanged() {
        let menu = MenuCatalog::default();
        assert_eq!(menu.describe_main_course("Wagyu Special"), "Wagyu Special");
    }

    #[test]
    fn test_catalog_override_from_json() {
        let json = r#"{ "appetizers": { "soup": "Miso broth" } }"#;
        let menu: MenuCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(menu.describe_appetizer("soup"), "Miso broth");
        // The replaced section drops the stock entries
        assert_eq!(menu.describe_appetizer("salad"), "salad");
        // Sections absent from the JSON keep their stock entries
        assert!(menu.describe_main_course("meat").starts_with("Slow-cooked beef"));
    }
}
