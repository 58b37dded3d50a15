//! Store construction parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sqlstore_dialect::EngineKind;

use crate::error::{Result, StoreError};

/// Parameters for creating a [`SqlStore`](crate::SqlStore).
///
/// Can be built in code or loaded from a JSON config file:
///
/// ```json
/// {
///     "db_type": "postgres",
///     "connection_string": "postgres://localhost/boards?binary_parameters=yes",
///     "table_prefix": "focalboard_"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreParams {
    /// Engine tag: `postgres`, `mysql` or `sqlite3`.
    pub db_type: String,
    /// Connection string for the database.
    pub connection_string: String,
    /// Prefix prepended to every table name.
    #[serde(default)]
    pub table_prefix: String,
    /// Whether the store serves a single user.
    #[serde(default)]
    pub is_single_user: bool,
}

impl StoreParams {
    /// Creates parameters with no table prefix in multi-user mode.
    #[must_use]
    pub fn new(db_type: impl Into<String>, connection_string: impl Into<String>) -> Self {
        Self {
            db_type: db_type.into(),
            connection_string: connection_string.into(),
            table_prefix: String::new(),
            is_single_user: false,
        }
    }

    /// Sets the table prefix.
    #[must_use]
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Sets single-user mode.
    #[must_use]
    pub fn single_user(mut self, enabled: bool) -> Self {
        self.is_single_user = enabled;
        self
    }

    /// Parses parameters from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the JSON does not describe
    /// store parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read, or
    /// [`StoreError::Serialization`] if its content is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validates the parameters and returns the engine they select.
    ///
    /// The table prefix is spliced into SQL unescaped, so it may only hold
    /// ASCII letters, digits and underscores.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidParams`] for an empty connection string
    /// or a bad table prefix, and [`StoreError::Dialect`] for an unknown
    /// engine tag.
    pub fn check_valid(&self) -> Result<EngineKind> {
        if self.connection_string.trim().is_empty() {
            return Err(StoreError::InvalidParams(
                "connection string must not be empty".to_string(),
            ));
        }

        if let Some(c) = self
            .table_prefix
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(StoreError::InvalidParams(format!(
                "table prefix '{}' contains invalid character '{c}'",
                self.table_prefix
            )));
        }

        Ok(self.db_type.parse()?)
    }
}
