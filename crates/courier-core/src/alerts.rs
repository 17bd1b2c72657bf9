//! Alert dialogs, presented by whatever UI layer hosts the app.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::error::Result;
use crate::locale::{Locale, Translator};

/// A ready-to-show alert. All strings are already translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl Alert {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            button: button.into(),
        }
    }

    /// Build an alert from translation keys.
    pub fn localized<T: Translator + ?Sized>(
        translator: &T,
        locale: Locale,
        title_key: &str,
        message_key: &str,
        button_key: &str,
    ) -> Self {
        Self::new(
            translator.get_string(title_key, locale),
            translator.get_string(message_key, locale),
            translator.get_string(button_key, locale),
        )
    }

    /// The generic "something went wrong" alert.
    pub fn exception<T: Translator + ?Sized>(translator: &T, locale: Locale) -> Self {
        Self::localized(translator, locale, "error", "errorOccurred", "ok")
    }
}

/// Shows alerts to the user
pub trait AlertPresenter: Send + Sync + 'static {
    /// Present `alert`; resolves once the host accepted it.
    fn show(&self, alert: Alert) -> impl Future<Output = Result<()>> + Send;
}

/// Presenter that records alerts instead of showing them
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Alert>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts presented so far, oldest first
    pub fn alerts(&self) -> Vec<Alert> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AlertPresenter for RecordingPresenter {
    async fn show(&self, alert: Alert) -> Result<()> {
        tracing::debug!("Alert: {} - {}", alert.title, alert.message);
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert);
        Ok(())
    }
}
