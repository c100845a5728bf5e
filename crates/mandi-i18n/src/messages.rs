//! UI message catalog.

use crate::{I18nError, Locale};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Locale code → message key → text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

const BUILTIN_EN: &[(&str, &str)] = &[
    ("error", "Error"),
    ("success", "Success"),
    ("allFieldsRequired", "Please fill in all required fields"),
    ("authError", "Authentication failed. Please try again."),
    ("authSuccess", "Logged in successfully"),
    ("userNotRegistered", "You are not registered yet. Please sign up."),
    ("notVerified", "Your account has not been verified yet"),
    ("phoneNotFound", "Phone number not found"),
    ("itemAddedSuccessfully", "Item added successfully"),
    ("failedToAddItem", "Failed to add item"),
    ("failedToUpdatePriceSlabs", "Failed to update price slabs"),
    ("fetchItemsFailed", "Failed to fetch items"),
    ("removeItemFailed", "Failed to remove item"),
    ("errorFetchingOrders", "Error fetching orders"),
    ("signupFailed", "Sign up failed"),
    ("errorOccurred", "Something went wrong"),
    ("invalidNumber", "Please enter a valid number"),
    ("belowMinimumQuantity", "Quantity is below the minimum order quantity"),
    ("selectLanguage", "Select language"),
];

const BUILTIN_HI: &[(&str, &str)] = &[
    ("error", "त्रुटि"),
    ("success", "सफल"),
    ("allFieldsRequired", "कृपया सभी आवश्यक फ़ील्ड भरें"),
    ("authError", "प्रमाणीकरण विफल रहा। कृपया पुनः प्रयास करें।"),
    ("authSuccess", "सफलतापूर्वक लॉग इन किया गया"),
    ("userNotRegistered", "आप अभी पंजीकृत नहीं हैं। कृपया साइन अप करें।"),
    ("notVerified", "आपका खाता अभी सत्यापित नहीं हुआ है"),
    ("phoneNotFound", "फ़ोन नंबर नहीं मिला"),
    ("itemAddedSuccessfully", "आइटम सफलतापूर्वक जोड़ा गया"),
    ("failedToAddItem", "आइटम जोड़ने में विफल"),
    ("failedToUpdatePriceSlabs", "मूल्य स्लैब अपडेट करने में विफल"),
    ("fetchItemsFailed", "आइटम लाने में विफल"),
    ("removeItemFailed", "आइटम हटाने में विफल"),
    ("errorFetchingOrders", "ऑर्डर लाने में त्रुटि"),
    ("signupFailed", "साइन अप विफल रहा"),
    ("errorOccurred", "कुछ गलत हो गया"),
    ("invalidNumber", "कृपया एक मान्य संख्या दर्ज करें"),
    ("belowMinimumQuantity", "मात्रा न्यूनतम ऑर्डर मात्रा से कम है"),
    ("selectLanguage", "भाषा चुनें"),
];

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// English and Hindi strings for every message the client raises itself.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, entries) in [("en", BUILTIN_EN), ("hi", BUILTIN_HI)] {
            let locale = Locale::new(locale);
            for (key, text) in entries {
                catalog.insert(&locale, *key, *text);
            }
        }
        catalog
    }

    /// Parse the `{"hi": {"error": "त्रुटि"}}` JSON shape. Locale codes
    /// are normalized, so `"HI"` and `"hi-IN"` land in `hi`.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        Ok(raw
            .into_iter()
            .fold(Self::new(), |mut catalog, (code, messages)| {
                catalog
                    .locales
                    .entry(Locale::new(&code).as_str().to_string())
                    .or_default()
                    .extend(messages);
                catalog
            }))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Overlay `other` on top of this catalog.
    pub fn merge(mut self, other: MessageCatalog) -> Self {
        for (locale, entries) in other.locales {
            self.locales.entry(locale).or_default().extend(entries);
        }
        self
    }

    pub fn insert(&mut self, locale: &Locale, key: impl Into<String>, text: impl Into<String>) {
        self.locales
            .entry(locale.as_str().to_string())
            .or_default()
            .insert(key.into(), text.into());
    }

    pub fn get(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.locales
            .get(locale.as_str())
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }
}

/// Message lookup for one locale.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    catalog: Arc<MessageCatalog>,
}

impl Translator {
    pub fn new(locale: Locale, catalog: Arc<MessageCatalog>) -> Self {
        Self { locale, catalog }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Text for `key`: active locale, then base locale, then the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog
            .get(&self.locale, key)
            .or_else(|| self.catalog.get(&Locale::base(), key))
            .unwrap_or(key)
    }
}
