//! The dialect adapter owned by a store.

use std::fmt;

use tracing::debug;

use crate::connection::binary_parameters_enabled;
use crate::dialect::SqlDialect;
use crate::engine::EngineKind;
use crate::error::Result;
use crate::interval;
use crate::rebind::rebind;

/// Produces engine-correct SQL fragments for one fixed engine.
///
/// The engine is chosen at construction and never changes. The adapter holds
/// no mutable state, so it can be shared freely across threads.
#[derive(Clone, Copy)]
pub struct DialectAdapter {
    engine: EngineKind,
    dialect: &'static dyn SqlDialect,
    binary_parameters: bool,
}

impl DialectAdapter {
    /// Creates an adapter for `engine`, inspecting `connection_string` for
    /// engine-specific flags.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::InvalidConnectionString`](crate::DialectError::InvalidConnectionString)
    /// if a PostgreSQL connection string cannot be parsed.
    pub fn new(engine: EngineKind, connection_string: &str) -> Result<Self> {
        let binary_parameters = binary_parameters_enabled(engine, connection_string)?;
        debug!(engine = %engine, binary_parameters, "Created dialect adapter");
        Ok(Self {
            engine,
            dialect: engine.dialect(),
            binary_parameters,
        })
    }

    /// Creates an adapter from an engine tag such as `"postgres"`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedDialect`](crate::DialectError::UnsupportedDialect)
    /// for an unknown tag, or any error from [`DialectAdapter::new`].
    pub fn from_tag(tag: &str, connection_string: &str) -> Result<Self> {
        Self::new(tag.parse()?, connection_string)
    }

    /// Returns the engine this adapter targets.
    #[must_use]
    pub const fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Returns the underlying per-engine strategy.
    #[must_use]
    pub const fn dialect(&self) -> &'static dyn SqlDialect {
        self.dialect
    }

    /// Returns whether the connection uses PostgreSQL binary parameters.
    #[must_use]
    pub const fn binary_parameters(&self) -> bool {
        self.binary_parameters
    }

    /// Quotes a table or column name.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        self.dialect.quote_identifier(name)
    }

    /// Returns the placeholder for the parameter at the 1-based `ordinal`.
    #[must_use]
    pub fn placeholder(&self, ordinal: usize) -> String {
        self.dialect.placeholder(ordinal)
    }

    /// Returns a string aggregate over `field`.
    ///
    /// On SQLite the delimiter is ignored and values are joined with commas.
    #[must_use]
    pub fn concat_aggregate(&self, field: &str, delimiter: &str) -> String {
        self.dialect.concat_aggregate(field, delimiter)
    }

    /// Returns a predicate testing whether parameter `ordinal` occurs in `column`.
    #[must_use]
    pub fn contains_predicate(&self, ordinal: usize, column: &str) -> String {
        self.dialect.contains_predicate(ordinal, column)
    }

    /// Returns the current time minus `interval` as RFC 3339 text.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::MalformedInterval`](crate::DialectError::MalformedInterval)
    /// if the interval magnitude is not an integer.
    #[allow(clippy::unused_self)]
    pub fn relative_timestamp(&self, interval: &str) -> Result<String> {
        interval::relative_timestamp(interval)
    }

    /// Rewrites `?` markers into this engine's placeholders.
    #[must_use]
    pub fn rebind(&self, sql: &str) -> String {
        rebind(self.dialect, sql)
    }
}

impl fmt::Debug for DialectAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectAdapter")
            .field("engine", &self.engine)
            .field("dialect", &self.dialect.name())
            .field("binary_parameters", &self.binary_parameters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;

    fn adapter(engine: EngineKind) -> DialectAdapter {
        DialectAdapter::new(engine, "postgres://localhost/boards").unwrap()
    }

    #[test]
    fn test_quote_and_placeholder_per_engine() {
        let pg = adapter(EngineKind::Postgres);
        let my = adapter(EngineKind::Mysql);
        let lite = adapter(EngineKind::Sqlite);

        assert_eq!(pg.quote_identifier("name"), "\"name\"");
        assert_eq!(my.quote_identifier("name"), "`name`");
        assert_eq!(lite.quote_identifier("name"), "\"name\"");

        assert_eq!(pg.placeholder(4), "$4");
        assert_eq!(my.placeholder(4), "?");
        assert_eq!(lite.placeholder(4), "$4");
    }

    #[test]
    fn test_concat_aggregate_per_engine() {
        assert_eq!(
            adapter(EngineKind::Sqlite).concat_aggregate("name", ","),
            "group_concat(name)"
        );
        assert_eq!(
            adapter(EngineKind::Postgres).concat_aggregate("name", ","),
            "string_agg(name, ',')"
        );
        assert_eq!(
            adapter(EngineKind::Mysql).concat_aggregate("name", ","),
            "GROUP_CONCAT(name SEPARATOR ',')"
        );
    }

    #[test]
    fn test_contains_predicate_per_engine() {
        assert_eq!(
            adapter(EngineKind::Sqlite).contains_predicate(1, "title"),
            "instr(title, $1) > 0"
        );
        assert_eq!(
            adapter(EngineKind::Mysql).contains_predicate(1, "title"),
            "instr(title, ?) > 0"
        );
        assert_eq!(
            adapter(EngineKind::Postgres).contains_predicate(1, "title"),
            "position($1 in title) > 0"
        );
    }

    #[test]
    fn test_outputs_are_repeatable() {
        for engine in EngineKind::ALL {
            let a = adapter(engine);
            assert_eq!(a.quote_identifier("x"), a.quote_identifier("x"));
            assert_eq!(a.placeholder(2), a.placeholder(2));
            assert_eq!(a.concat_aggregate("f", ";"), a.concat_aggregate("f", ";"));
            assert_eq!(a.contains_predicate(5, "c"), a.contains_predicate(5, "c"));
            assert_eq!(a.rebind("a = ? AND b = ?"), a.rebind("a = ? AND b = ?"));
        }
    }

    #[test]
    fn test_binary_parameters_flag() {
        let a = DialectAdapter::new(
            EngineKind::Postgres,
            "postgres://localhost/boards?binary_parameters=yes",
        )
        .unwrap();
        assert!(a.binary_parameters());

        let a = DialectAdapter::new(EngineKind::Mysql, "user:pass@tcp(localhost)/boards").unwrap();
        assert!(!a.binary_parameters());
    }

    #[test]
    fn test_construction_fails_on_bad_postgres_dsn() {
        let result = DialectAdapter::new(EngineKind::Postgres, "host=localhost dbname=boards");
        assert!(matches!(
            result,
            Err(DialectError::InvalidConnectionString(_))
        ));
    }

    #[test]
    fn test_from_tag() {
        let a = DialectAdapter::from_tag("sqlite3", ":memory:").unwrap();
        assert_eq!(a.engine(), EngineKind::Sqlite);

        let result = DialectAdapter::from_tag("oracle", "");
        assert!(matches!(result, Err(DialectError::UnsupportedDialect(_))));
    }

    #[test]
    fn test_relative_timestamp_errors_propagate() {
        let a = adapter(EngineKind::Sqlite);
        assert!(a.relative_timestamp("2 days").is_ok());
        assert!(matches!(
            a.relative_timestamp("abc days"),
            Err(DialectError::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_adapter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DialectAdapter>();
    }

    #[test]
    fn test_debug_output() {
        let text = format!("{:?}", adapter(EngineKind::Mysql));
        assert!(text.contains("Mysql"));
        assert!(text.contains("binary_parameters: false"));
    }
}
