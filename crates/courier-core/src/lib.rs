//! courier-core - Core library for Courier
//!
//! Shared helpers used by the Courier delivery app and its CLI: email
//! masking, range pagination, persisted app properties, locale lookup,
//! outbound mail, alerts and a handful of UI-state helpers.

pub mod activity;
pub mod alerts;
pub mod config;
pub mod connectivity;
pub mod dates;
pub mod db;
pub mod error;
pub mod form;
pub mod grid;
pub mod locale;
pub mod mail;
pub mod mask;
pub mod observable;
pub mod pagination;
pub mod properties;
pub mod session;
pub mod text;

pub use error::{Error, Result};
pub use locale::{Catalog, Locale, Translator};
pub use mask::mask_email;
pub use pagination::{paginate, PageCursor};
pub use properties::PropertyStore;
