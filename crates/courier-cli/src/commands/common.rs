use std::env;
use std::path::{Path, PathBuf};

use courier_core::config::AppConfig;
use courier_core::db::Database;

use crate::error::CliError;

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    cli_db_path
        .or_else(|| env::var_os("COURIER_DB_PATH").map(PathBuf::from))
        .or_else(default_db_path)
        .ok_or(CliError::NoDataDir)
}

pub fn default_db_path() -> Option<PathBuf> {
    Some(dirs::data_dir()?.join("courier").join("courier.db"))
}

pub fn resolve_config_path(cli_config: Option<PathBuf>) -> PathBuf {
    cli_config
        .or_else(|| env::var_os("COURIER_CONFIG").map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join("courier").join("config.json")))
        .unwrap_or_else(|| PathBuf::from("courier.json"))
}

pub fn load_config(path: &Path) -> Result<AppConfig, CliError> {
    Ok(AppConfig::load(path)?.with_env_overrides(|name| env::var(name).ok())?)
}

pub async fn open_database(path: &Path) -> Result<Database, CliError> {
    Ok(Database::open(path).await?)
}

pub fn normalize_key(key: &str) -> Result<&str, CliError> {
    let key = key.trim();
    if key.is_empty() {
        Err(CliError::EmptyKey)
    } else {
        Ok(key)
    }
}
