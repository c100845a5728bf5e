//! Client configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mandi_auth::UserType;
use mandi_i18n::Locale;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_API_BASE_URL: &str = "MANDI_API_BASE_URL";
/// Environment variable overriding [`LocaleConfig::default_locale`].
pub const ENV_DEFAULT_LOCALE: &str = "MANDI_DEFAULT_LOCALE";

/// Storefront client configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Language settings.
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Local session storage.
    #[serde(default)]
    pub session: SessionConfig,
}

impl ClientConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply `MANDI_API_BASE_URL` and `MANDI_DEFAULT_LOCALE`.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable source.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = value(ENV_API_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(code) = value(ENV_DEFAULT_LOCALE) {
            self.locale.default_locale = Locale::new(code);
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server origin; endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Account type sent with auth calls.
    #[serde(default)]
    pub user_type: UserType,
}

fn default_base_url() -> String {
    "https://mandie.co.in".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_type: UserType::Supplier,
        }
    }
}

/// Language settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Used when neither a stored choice nor a device language is known.
    #[serde(default = "default_locale")]
    pub default_locale: Locale,

    /// Item-name translations, locale → canonical name → display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_translations: Option<PathBuf>,

    /// Extra UI messages, locale → key → text, layered over the built-ins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<PathBuf>,
}

fn default_locale() -> Locale {
    Locale::new("hi")
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            item_translations: None,
            messages: None,
        }
    }
}

/// Local session storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file backing the session; in-memory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}
