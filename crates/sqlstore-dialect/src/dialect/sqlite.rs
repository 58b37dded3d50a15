//! SQLite dialect.

use super::SqlDialect;

/// SQLite dialect.
///
/// SQLite accepts `$N` parameters, which keeps statements shareable with
/// PostgreSQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    /// SQLite's `group_concat` always joins with its default comma here:
    /// the delimiter is ignored and callers rely on that.
    fn concat_aggregate(&self, field: &str, _delimiter: &str) -> String {
        format!("group_concat({field})")
    }
}
