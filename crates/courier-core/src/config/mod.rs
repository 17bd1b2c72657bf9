//! Application configuration.
//!
//! `AppConfig` is read from an optional JSON file and then overridden by
//! `COURIER_*` environment variables. Every field has a usable default so an
//! empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dates::SERVER_DATE_FORMAT;
use crate::error::{Error, Result};
use crate::locale::{Catalog, Locale};
use crate::mail::MailConfig;
use crate::text::trimmed_non_blank;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MASK_SYMBOL: &str = "*";

/// Runtime configuration shared by the app shells and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Locale used when neither the store nor the device decides
    pub default_locale: Locale,
    /// Items revealed per "load more"
    pub page_size: usize,
    /// `strftime` format the server expects for dates
    pub date_format: String,
    /// Symbol used when masking emails for display
    pub mask_symbol: String,
    /// Extra translation table merged over the built-in strings
    pub catalog_path: Option<PathBuf>,
    /// Outbound mail API; mail features are disabled without it
    pub mail: Option<MailConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            page_size: DEFAULT_PAGE_SIZE,
            date_format: SERVER_DATE_FORMAT.to_string(),
            mask_symbol: DEFAULT_MASK_SYMBOL.to_string(),
            catalog_path: None,
            mail: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)
            .map_err(|error| Error::Config(format!("invalid config JSON: {error}")))?;
        config.validated()
    }

    /// Load from `path`, or defaults when the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let payload = std::fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Apply `COURIER_*` overrides read through `lookup`.
    ///
    /// Mail settings are only created from the environment when the URL, key
    /// and sender are all present.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| trimmed_non_blank(lookup(name));

        if let Some(locale) = var("COURIER_LOCALE") {
            self.default_locale = locale.parse()?;
        }
        if let Some(page_size) = var("COURIER_PAGE_SIZE") {
            self.page_size = page_size.parse().map_err(|_| {
                Error::Config(format!("COURIER_PAGE_SIZE must be a number, got {page_size:?}"))
            })?;
        }
        if let Some(format) = var("COURIER_DATE_FORMAT") {
            self.date_format = format;
        }
        if let Some(path) = var("COURIER_CATALOG") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        match (
            var("COURIER_MAIL_API_URL"),
            var("COURIER_MAIL_API_KEY"),
            var("COURIER_MAIL_FROM"),
        ) {
            (Some(api_url), Some(api_key), Some(from_address)) => {
                self.mail = Some(MailConfig {
                    api_url,
                    api_key,
                    from_address,
                    from_name: var("COURIER_MAIL_FROM_NAME"),
                });
            }
            (None, None, None) => {}
            _ => {
                tracing::warn!(
                    "Ignoring partial mail settings; set COURIER_MAIL_API_URL, COURIER_MAIL_API_KEY and COURIER_MAIL_FROM together"
                );
            }
        }

        self.validated()
    }

    /// Built-in strings merged with the configured catalog file, if any.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let builtin = Catalog::builtin();
        let Some(path) = &self.catalog_path else {
            return Ok(builtin);
        };
        let payload = std::fs::read_to_string(path)?;
        Ok(builtin.merged(Catalog::from_json(&payload)?))
    }

    fn validated(mut self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if self.mask_symbol.is_empty() {
            return Err(Error::Config("mask_symbol must not be empty".to_string()));
        }
        self.mail = self.mail.map(MailConfig::normalized).transpose()?;
        Ok(self)
    }
}
