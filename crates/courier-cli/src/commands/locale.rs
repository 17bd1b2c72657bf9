use std::path::Path;

use courier_core::config::AppConfig;
use courier_core::locale::{
    device_locale_from_env, get_string, resolve_locale, Locale, TextDirection,
};
use courier_core::properties::{set_and_save, LibSqlPropertyStore};
use courier_core::session::LOCALE_KEY;

use crate::commands::common::open_database;
use crate::error::CliError;

pub async fn run_translate(
    key: &str,
    locale: Option<&str>,
    config: &AppConfig,
    db_path: &Path,
) -> Result<(), CliError> {
    let locale = locale.map(str::parse::<Locale>).transpose()?;
    let catalog = config.load_catalog()?;

    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    println!("{}", get_string(&catalog, &store, key, locale).await?);
    Ok(())
}

pub async fn run_locale(set: Option<&str>, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());

    let locale = if let Some(code) = set {
        let locale: Locale = code.parse()?;
        set_and_save(&store, LOCALE_KEY, locale.code()).await?;
        locale
    } else {
        resolve_locale(&store, device_locale_from_env()).await?
    };

    println!("{}", describe_locale(locale));
    Ok(())
}

pub fn describe_locale(locale: Locale) -> String {
    let direction = match locale.direction() {
        TextDirection::LeftToRight => "left-to-right",
        TextDirection::RightToLeft => "right-to-left",
    };
    format!("{locale} ({direction})")
}
