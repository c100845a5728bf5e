//! Localization for the Mandi supplier storefront.
//!
//! - [`resolve_name`] maps a canonical (English) item name to its display
//!   name in a locale, falling back to the canonical name on any miss.
//! - [`NameResolver`] captures one locale and one table so a whole list
//!   render resolves against the same snapshot.
//! - [`Translator`] looks up UI messages with locale → base locale → key
//!   fallback.
//!
//! # Example
//!
//! ```rust
//! use mandi_i18n::{resolve_name, Locale, TranslationTable};
//!
//! let table = TranslationTable::from_json_str(r#"{"hi": {"Tomato": "टमाटर"}}"#).unwrap();
//! assert_eq!(resolve_name("Tomato", &Locale::new("hi"), Some(&table)), "टमाटर");
//! assert_eq!(resolve_name("Tomato", &Locale::new("fr"), Some(&table)), "Tomato");
//! assert_eq!(resolve_name("Tomato", &Locale::new("hi"), None), "Tomato");
//! ```

mod error;
mod locale;
mod messages;
mod resolver;
mod table;

pub use error::I18nError;
pub use locale::{select_locale, Locale, LocaleOption, SUPPORTED_LOCALES};
pub use messages::{MessageCatalog, Translator};
pub use resolver::{resolve_name, NameResolver};
pub use table::TranslationTable;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        resolve_name, select_locale, I18nError, Locale, MessageCatalog, NameResolver,
        TranslationTable, Translator,
    };
}
