//! PostgreSQL dialect.

use super::SqlDialect;

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn concat_aggregate(&self, field: &str, delimiter: &str) -> String {
        format!("string_agg({field}, '{delimiter}')")
    }

    fn contains_predicate(&self, ordinal: usize, column: &str) -> String {
        // PostgreSQL has no instr().
        format!("position({} in {column}) > 0", self.placeholder(ordinal))
    }
}
