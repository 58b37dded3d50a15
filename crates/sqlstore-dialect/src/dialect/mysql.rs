//! MySQL dialect.

use super::SqlDialect;

/// MySQL dialect.
///
/// MySQL placeholders are bare `?` markers bound in order, so the ordinal
/// passed to [`SqlDialect::placeholder`] is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn backslash_escapes(&self) -> bool {
        true
    }

    fn numbered_placeholders(&self) -> bool {
        false
    }

    fn concat_aggregate(&self, field: &str, delimiter: &str) -> String {
        format!("GROUP_CONCAT({field} SEPARATOR '{delimiter}')")
    }
}
