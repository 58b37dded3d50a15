//! Supported database engines.

use std::fmt;
use std::str::FromStr;

use crate::dialect::{MysqlDialect, PostgresDialect, SqlDialect, SqliteDialect};
use crate::error::DialectError;

static POSTGRES: PostgresDialect = PostgresDialect::new();
static MYSQL: MysqlDialect = MysqlDialect::new();
static SQLITE: SqliteDialect = SqliteDialect::new();

/// The database engine a store talks to.
///
/// The set is closed: an unknown tag is rejected when parsed instead of
/// producing empty SQL fragments later on.
///
/// Parsing with [`str::parse`] ignores surrounding whitespace and ASCII case,
/// and accepts `postgresql` and `sqlite` next to the canonical tags returned
/// by [`EngineKind::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// PostgreSQL.
    Postgres,
    /// MySQL and MariaDB.
    Mysql,
    /// SQLite 3.
    Sqlite,
}

impl EngineKind {
    /// All supported engines.
    pub const ALL: [Self; 3] = [Self::Postgres, Self::Mysql, Self::Sqlite];

    /// Returns the canonical tag used in configuration files.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite3",
        }
    }

    /// Returns the SQL strategy for this engine.
    #[must_use]
    pub fn dialect(self) -> &'static dyn SqlDialect {
        match self {
            Self::Postgres => &POSTGRES,
            Self::Mysql => &MYSQL,
            Self::Sqlite => &SQLITE,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EngineKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "sqlite3" | "sqlite" => Ok(Self::Sqlite),
            _ => Err(DialectError::UnsupportedDialect(s.to_string())),
        }
    }
}
