//! Error types for courier-core

use thiserror::Error;

/// Result type alias using courier-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in courier-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input does not have the expected shape (e.g. an email without exactly one `@`)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Pagination offset past the end of the source
    #[error("Offset {offset} is out of range for a source of length {len}")]
    IndexOutOfRange { offset: usize, len: usize },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Outbound mail delivery error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
