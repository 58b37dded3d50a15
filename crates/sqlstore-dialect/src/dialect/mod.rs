//! Per-engine SQL syntax.
//!
//! Every engine spells a handful of common operations differently. Each
//! engine gets one implementation of [`SqlDialect`], and callers pick one
//! through [`EngineKind::dialect`](crate::EngineKind::dialect) instead of
//! branching on the engine at every call site.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

/// Trait for engine-specific SQL fragments.
///
/// All methods are pure: the output depends only on the dialect and the
/// arguments. Outputs are raw SQL text meant to be spliced into a larger
/// statement, so callers stay responsible for binding values.
pub trait SqlDialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Wraps an identifier in the dialect's quote character.
    ///
    /// Quoting is not idempotent; quote each identifier exactly once.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }

    /// Returns whether a backslash escapes the next character inside quoted
    /// literals.
    fn backslash_escapes(&self) -> bool {
        false
    }

    /// Returns whether placeholders carry their 1-based position (`$1`).
    fn numbered_placeholders(&self) -> bool {
        true
    }

    /// Returns the placeholder for the parameter at the 1-based `ordinal`.
    fn placeholder(&self, ordinal: usize) -> String {
        if self.numbered_placeholders() {
            format!("${ordinal}")
        } else {
            "?".to_string()
        }
    }

    /// Returns an aggregate concatenating `field` across rows, separated
    /// by `delimiter`.
    fn concat_aggregate(&self, field: &str, delimiter: &str) -> String;

    /// Returns a predicate that is true when the bound parameter at
    /// `ordinal` occurs inside `column`.
    fn contains_predicate(&self, ordinal: usize, column: &str) -> String {
        format!("instr({column}, {}) > 0", self.placeholder(ordinal))
    }
}
