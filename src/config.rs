//! Admin client configuration.

use crate::messages::{Locale, Messages};
use std::env;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_BRAND: &str = "Catálogo";

pub const ENV_BASE_URL: &str = "CATALOG_API_URL";
pub const ENV_TIMEOUT: &str = "CATALOG_TIMEOUT_SECS";
pub const ENV_BRAND: &str = "CATALOG_BRAND";
pub const ENV_LOCALE: &str = "CATALOG_LOCALE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid timeout {0:?}: expected whole seconds")]
    InvalidTimeout(String),

    #[error("Unknown locale {0:?}: expected \"es\" or \"en\"")]
    UnknownLocale(String),
}

/// Where the API lives and how the views talk.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// Host the `/api/...` paths are resolved against (e.g., "http://localhost:9000")
    pub base_url: String,

    /// Request timeout in seconds. `None` means requests may hang forever.
    pub timeout: Option<u64>,

    /// Text of the brand link in the nav bar
    pub brand: String,

    /// Language of the display strings
    pub locale: Locale,
}

impl AdminConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            brand: DEFAULT_BRAND.to_string(),
            locale: Locale::default(),
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Reads `CATALOG_*` variables, falling back to the defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new(lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout(seconds);
        }
        if let Some(brand) = lookup(ENV_BRAND) {
            config = config.with_brand(brand);
        }
        if let Some(raw) = lookup(ENV_LOCALE) {
            let locale = raw.parse::<Locale>().map_err(ConfigError::UnknownLocale)?;
            config = config.with_locale(locale);
        }
        Ok(config)
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
