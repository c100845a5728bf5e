//! Locale codes and selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language code such as `en` or `hi`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Code of the source language item names are written in.
    pub const BASE_CODE: &'static str = "en";

    /// Normalizes to a lowercase language code; region suffixes such as
    /// `-IN` are dropped.
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref().trim();
        let language = code.split(['-', '_']).next().unwrap_or(code);
        Self(language.to_ascii_lowercase())
    }

    /// The source locale.
    pub fn base() -> Self {
        Self(Self::BASE_CODE.to_string())
    }

    pub fn is_base(&self) -> bool {
        self.0 == Self::BASE_CODE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse_nonempty(code: Option<&str>) -> Option<Self> {
        code.map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Self::new)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::base()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// An entry of the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: &'static str,
    /// Name of the language in that language.
    pub label: &'static str,
}

/// Languages offered by the language picker.
pub const SUPPORTED_LOCALES: &[LocaleOption] = &[
    LocaleOption {
        code: "en",
        label: "English",
    },
    LocaleOption {
        code: "hi",
        label: "\u{939}\u{93f}\u{902}\u{926}\u{940}",
    },
];

/// Pick the active locale: the stored choice, else the device language,
/// else `default`.
pub fn select_locale(stored: Option<&str>, device: Option<&str>, default: &Locale) -> Locale {
    Locale::parse_nonempty(stored)
        .or_else(|| Locale::parse_nonempty(device))
        .unwrap_or_else(|| default.clone())
}
