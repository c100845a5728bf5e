//! Item display-name resolution.

use crate::{Locale, TranslationTable};
use std::sync::Arc;

/// Display name of `canonical` in `locale`.
///
/// The base locale short-circuits to the canonical name; otherwise a missing
/// table (not loaded yet), locale, or key all fall back to it. Never fails.
pub fn resolve_name<'a>(
    canonical: &'a str,
    locale: &Locale,
    table: Option<&'a TranslationTable>,
) -> &'a str {
    if locale.is_base() {
        return canonical;
    }
    table
        .and_then(|t| t.lookup(locale, canonical))
        .unwrap_or(canonical)
}

/// A resolver pinned to one locale and one table.
///
/// Built from a snapshot of the session state, so a locale change during a
/// render pass cannot mix languages within that pass. Cheap to clone and
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct NameResolver {
    locale: Locale,
    table: Option<Arc<TranslationTable>>,
}

impl NameResolver {
    pub fn new(locale: Locale, table: Option<Arc<TranslationTable>>) -> Self {
        Self { locale, table }
    }

    /// A resolver that always returns the canonical name.
    pub fn passthrough() -> Self {
        Self::new(Locale::base(), None)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn resolve<'a>(&'a self, canonical: &'a str) -> &'a str {
        resolve_name(canonical, &self.locale, self.table.as_deref())
    }

    /// Owned variant for building view models.
    pub fn resolve_owned(&self, canonical: &str) -> String {
        self.resolve(canonical).to_string()
    }
}
