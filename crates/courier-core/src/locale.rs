//! Supported locales and translated-string lookup.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::properties::PropertyStore;
use crate::session::LOCALE_KEY;
use crate::text::is_blank_str;

/// Languages the app ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Arabic
    Ar,
}

/// Layout direction for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// Two-letter ISO code
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a code, falling back to English for anything unsupported.
    pub fn parse_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// Layout direction used by pages in this locale
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::LeftToRight,
            Self::Ar => TextDirection::RightToLeft,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(Error::InvalidInput(format!("unsupported locale: {other}"))),
        }
    }
}

/// Reduce an OS locale tag (`ar_EG.UTF-8`, `en-US`, `C`) to a supported locale.
pub fn device_locale(tag: &str) -> Locale {
    let language = tag
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();
    Locale::parse_or_default(language)
}

/// Device locale from the usual POSIX environment variables.
pub fn device_locale_from_env() -> Locale {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !is_blank_str(value))
        .map_or_else(Locale::default, |tag| device_locale(&tag))
}

/// Translated-string lookup
pub trait Translator {
    /// Translate `key` for `locale`. Unknown keys come back unchanged.
    fn get_string(&self, key: &str, locale: Locale) -> String;
}

/// In-memory per-locale message tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    messages: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings the core helpers themselves need (alerts, reset mail).
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (key, en, ar) in [
            ("error", "Error", "خطأ"),
            (
                "errorOccurred",
                "Something went wrong, please try again.",
                "حدث خطأ، يرجى المحاولة مرة أخرى.",
            ),
            ("ok", "OK", "حسناً"),
            (
                "noInternet",
                "No internet connection.",
                "لا يوجد اتصال بالإنترنت.",
            ),
            ("resetPass", "Reset your password", "إعادة تعيين كلمة المرور"),
            (
                "emailBody",
                "Your verification code is: ",
                "رمز التحقق الخاص بك هو: ",
            ),
        ] {
            catalog.insert(Locale::En, key, en);
            catalog.insert(Locale::Ar, key, ar);
        }
        catalog
    }

    /// Parse a catalog from JSON shaped like `{"en": {"key": "text"}, "ar": {...}}`.
    pub fn from_json(payload: &str) -> Result<Self> {
        let messages: HashMap<Locale, HashMap<String, String>> = serde_json::from_str(payload)?;
        Ok(Self { messages })
    }

    /// Add or replace one message
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
        self.messages
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Overlay `other` on top of this catalog
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        for (locale, entries) in other.messages {
            self.messages.entry(locale).or_default().extend(entries);
        }
        self
    }

    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.messages
            .get(&locale)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }
}

impl Translator for Catalog {
    fn get_string(&self, key: &str, locale: Locale) -> String {
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, Locale::En))
            .map_or_else(
                || {
                    tracing::debug!("Missing translation for {key} ({locale})");
                    key.to_string()
                },
                str::to_string,
            )
    }
}

/// The stored app locale, or `device` when none is stored. Never writes.
pub async fn stored_locale<S: PropertyStore>(store: &S, device: Locale) -> Result<Locale> {
    Ok(store
        .get(LOCALE_KEY)
        .await?
        .map_or(device, |stored| Locale::parse_or_default(&stored)))
}

/// The stored app locale, initialising it from the device on first use.
pub async fn resolve_locale<S: PropertyStore>(store: &S, device: Locale) -> Result<Locale> {
    if let Some(stored) = store.get(LOCALE_KEY).await? {
        return Ok(Locale::parse_or_default(&stored));
    }

    store.set(LOCALE_KEY, device.code()).await?;
    store.save().await?;
    tracing::info!("Initialised app locale to {device}");
    Ok(device)
}

/// Translate `key`, preferring an explicit locale over the stored one.
///
/// A missing or empty stored locale means English.
pub async fn get_string<T, S>(
    translator: &T,
    store: &S,
    key: &str,
    locale: Option<Locale>,
) -> Result<String>
where
    T: Translator + ?Sized,
    S: PropertyStore,
{
    let locale = match locale {
        Some(locale) => locale,
        None => store
            .get(LOCALE_KEY)
            .await?
            .map_or_else(Locale::default, |code| Locale::parse_or_default(&code)),
    };
    Ok(translator.get_string(key, locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::MemoryPropertyStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_supported_codes() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" ar ".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::parse_or_default("fr"), Locale::En);
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), TextDirection::RightToLeft);
        assert_eq!(Locale::En.direction(), TextDirection::LeftToRight);
    }

    #[test]
    fn device_locale_reduces_os_tags() {
        assert_eq!(device_locale("ar_EG.UTF-8"), Locale::Ar);
        assert_eq!(device_locale("en-US"), Locale::En);
        assert_eq!(device_locale("de_DE"), Locale::En);
        assert_eq!(device_locale("C"), Locale::En);
        assert_eq!(device_locale(""), Locale::En);
    }

    #[test]
    fn catalog_falls_back_to_english_then_key() {
        let mut catalog = Catalog::new();
        catalog.insert(Locale::En, "greeting", "Hello");

        assert_eq!(catalog.get_string("greeting", Locale::Ar), "Hello");
        assert_eq!(catalog.get_string("missing", Locale::Ar), "missing");
    }

    #[test]
    fn builtin_catalog_has_both_languages() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_string("ok", Locale::En), "OK");
        assert_ne!(
            catalog.get_string("ok", Locale::Ar),
            catalog.get_string("ok", Locale::En)
        );
    }

    #[test]
    fn catalog_from_json_overrides_builtin() {
        let custom = Catalog::from_json(r#"{"en": {"ok": "Got it"}, "ar": {"hello": "مرحبا"}}"#)
            .unwrap();
        let catalog = Catalog::builtin().merged(custom);

        assert_eq!(catalog.get_string("ok", Locale::En), "Got it");
        assert_eq!(catalog.get_string("hello", Locale::Ar), "مرحبا");
        assert_eq!(catalog.get_string("error", Locale::En), "Error");
    }

    #[test]
    fn catalog_from_json_rejects_unknown_locale() {
        assert!(Catalog::from_json(r#"{"fr": {"ok": "D'accord"}}"#).is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn resolve_locale_persists_device_locale_once() {
        let store = MemoryPropertyStore::new();

        assert_eq!(resolve_locale(&store, Locale::Ar).await.unwrap(), Locale::Ar);
        assert_eq!(store.get(LOCALE_KEY).await.unwrap().as_deref(), Some("ar"));

        // Later device changes don't override the stored choice.
        assert_eq!(resolve_locale(&store, Locale::En).await.unwrap(), Locale::Ar);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stored_locale_falls_back_without_writing() {
        let store = MemoryPropertyStore::new();

        assert_eq!(stored_locale(&store, Locale::Ar).await.unwrap(), Locale::Ar);
        assert_eq!(store.get(LOCALE_KEY).await.unwrap(), None);

        store.set(LOCALE_KEY, "en").await.unwrap();
        assert_eq!(stored_locale(&store, Locale::Ar).await.unwrap(), Locale::En);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_string_prefers_explicit_locale() {
        let store = MemoryPropertyStore::with_values([(LOCALE_KEY, "ar")]);
        let mut catalog = Catalog::new();
        catalog.insert(Locale::En, "ok", "OK");
        catalog.insert(Locale::Ar, "ok", "حسناً");

        assert_eq!(
            get_string(&catalog, &store, "ok", Some(Locale::En)).await.unwrap(),
            "OK"
        );
        assert_eq!(get_string(&catalog, &store, "ok", None).await.unwrap(), "حسناً");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_string_defaults_to_english_without_stored_locale() {
        let store = MemoryPropertyStore::with_values([(LOCALE_KEY, "")]);
        let catalog = Catalog::builtin();

        assert_eq!(get_string(&catalog, &store, "ok", None).await.unwrap(), "OK");
    }
}
