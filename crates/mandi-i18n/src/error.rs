//! Localization error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading translation data. Lookups themselves never fail.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to read a translation file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Translation data is not the expected JSON shape.
    #[error("Invalid translation data: {0}")]
    Parse(#[from] serde_json::Error),
}
