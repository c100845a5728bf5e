//! Item-name translation table.

use crate::{I18nError, Locale};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Locale code → canonical item name → localized name.
///
/// Loaded once at startup and read-only afterwards. A missing locale or key
/// is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    locales: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{"hi": {"Tomato": "टमाटर"}}` JSON shape.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        Ok(raw
            .into_iter()
            .fold(Self::new(), |mut table, (code, names)| {
                table
                    .locales
                    .entry(Locale::new(&code).as_str().to_string())
                    .or_default()
                    .extend(names);
                table
            }))
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), locales = table.locales.len(), "Loaded item translations");
        Ok(table)
    }

    /// Add a single translation.
    pub fn insert(
        &mut self,
        locale: &Locale,
        canonical: impl Into<String>,
        localized: impl Into<String>,
    ) {
        self.locales
            .entry(locale.as_str().to_string())
            .or_default()
            .insert(canonical.into(), localized.into());
    }

    /// All names for a locale, if the locale is present.
    pub fn locale(&self, locale: &Locale) -> Option<&HashMap<String, String>> {
        self.locales.get(locale.as_str())
    }

    /// One localized name.
    pub fn lookup(&self, locale: &Locale, canonical: &str) -> Option<&str> {
        self.locale(locale)
            .and_then(|names| names.get(canonical))
            .map(String::as_str)
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.locales.contains_key(locale.as_str())
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }
}
