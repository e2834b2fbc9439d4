//! Translated labels and recommendation texts.
//!
//! Catalogs are embedded at build time. An unknown language falls back to
//! English; the fallback is only visible at debug log level.

use std::collections::HashMap;

use tracing::debug;

pub const DEFAULT_LANGUAGE: &str = "en";

static EN: &str = include_str!("../locales/en.json");
static FR: &str = include_str!("../locales/fr.json");

#[derive(Debug, Clone)]
pub struct Translations {
    language: &'static str,
    catalog: HashMap<String, String>,
}

impl Translations {
    pub fn load(language: &str) -> Self {
        let (language, raw) = match language {
            "en" => ("en", EN),
            "fr" => ("fr", FR),
            other => {
                debug!(
                    language = other,
                    "no translation catalog for language, falling back to '{DEFAULT_LANGUAGE}'"
                );
                (DEFAULT_LANGUAGE, EN)
            }
        };

        Self {
            language,
            catalog: serde_json::from_str(raw).unwrap_or_default(),
        }
    }

    pub fn language(&self) -> &str {
        self.language
    }

    /// Returns the translated text, or the key itself when it is missing
    /// from the catalog.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::load(DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_catalog_resolves_known_keys() {
        let i18n = Translations::load("en");
        assert_eq!(i18n.language(), "en");
        assert_eq!(i18n.get("metric.eco_index"), "Eco-index");
    }

    #[test]
    fn french_catalog_is_selectable() {
        let i18n = Translations::load("fr");
        assert_eq!(i18n.language(), "fr");
        assert_eq!(i18n.get("metric.best_practices"), "Bonnes pratiques");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let i18n = Translations::load("eo");
        assert_eq!(i18n.language(), "en");
        assert_eq!(i18n.get("metric.performance"), "Performance");
    }

    #[test]
    fn missing_key_echoes_the_key() {
        let i18n = Translations::load("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let en = Translations::load("en");
        let fr = Translations::load("fr");
        let mut en_keys: Vec<_> = en.catalog.keys().collect();
        let mut fr_keys: Vec<_> = fr.catalog.keys().collect();
        en_keys.sort();
        fr_keys.sort();
        assert_eq!(en_keys, fr_keys);
    }
}
