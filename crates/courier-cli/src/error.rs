use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] courier_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Property key cannot be empty")]
    EmptyKey,
    #[error("Could not resolve a data directory; pass --db-path or set COURIER_DB_PATH")]
    NoDataDir,
    #[error(
        "Mail is not configured. Add a \"mail\" section to the config file or set COURIER_MAIL_API_URL, COURIER_MAIL_API_KEY and COURIER_MAIL_FROM."
    )]
    MailNotConfigured,
}
