use std::path::Path;

use courier_core::properties::{property_or_empty, set_and_save, LibSqlPropertyStore};
use courier_core::PropertyStore;
use serde::Serialize;

use crate::commands::common::{normalize_key, open_database};
use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PropertyItem {
    pub key: String,
    pub value: String,
}

pub async fn run_get(key: &str, db_path: &Path) -> Result<(), CliError> {
    let key = normalize_key(key)?;
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    println!("{}", property_or_empty(&store, key).await?);
    Ok(())
}

pub async fn run_set(key: &str, value: &str, db_path: &Path) -> Result<(), CliError> {
    let key = normalize_key(key)?;
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    set_and_save(&store, key, value).await?;
    println!("Set {key}");
    Ok(())
}

pub async fn run_remove(key: &str, db_path: &Path) -> Result<(), CliError> {
    let key = normalize_key(key)?;
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    store.remove(key).await?;
    store.save().await?;
    println!("Removed {key}");
    Ok(())
}

pub async fn run_list(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let items = list_properties(db_path).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_property_lines(&items) {
            println!("{line}");
        }
    }
    Ok(())
}

pub async fn list_properties(db_path: &Path) -> Result<Vec<PropertyItem>, CliError> {
    let db = open_database(db_path).await?;
    let store = LibSqlPropertyStore::new(db.connection());
    Ok(store
        .list()
        .await?
        .into_iter()
        .map(|(key, value)| PropertyItem { key, value })
        .collect())
}

/// `key = value` lines; the password is never echoed.
pub fn format_property_lines(items: &[PropertyItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["No properties stored.".to_string()];
    }

    items
        .iter()
        .map(|item| {
            let value = if item.key == courier_core::session::PASSWORD_KEY {
                "********"
            } else {
                item.value.as_str()
            };
            format!("{} = {value}", item.key)
        })
        .collect()
}
