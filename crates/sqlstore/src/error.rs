//! Error types for the store shell.

use sqlstore_dialect::DialectError;

/// Errors that can occur while creating or using a [`SqlStore`](crate::SqlStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store parameters failed validation.
    #[error("invalid store parameters: {0}")]
    InvalidParams(String),

    /// Dialect setup or fragment generation failed.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (reading config files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
