//! Error types for dialect helpers.

/// Errors raised while building or using a [`DialectAdapter`](crate::DialectAdapter).
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// The connection string could not be parsed as a URL.
    #[error("invalid connection string: {0}")]
    InvalidConnectionString(#[from] url::ParseError),

    /// The engine tag does not name a supported database.
    #[error("unsupported database engine '{0}' (expected one of: postgres, mysql, sqlite3)")]
    UnsupportedDialect(String),

    /// An interval string could not be turned into a timestamp.
    #[error("malformed interval '{interval}': {reason}")]
    MalformedInterval {
        /// The interval as given by the caller.
        interval: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl DialectError {
    pub(crate) fn malformed_interval(interval: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInterval {
            interval: interval.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
