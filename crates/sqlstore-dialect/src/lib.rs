//! # sqlstore-dialect
//!
//! Engine-specific SQL fragments for stores that run on PostgreSQL, MySQL
//! and SQLite.
//!
//! A query builder asks the [`DialectAdapter`] for any fragment whose syntax
//! differs between engines and splices the returned text into its statement.
//! The adapter never talks to a database.
//!
//! | fragment | PostgreSQL | MySQL | SQLite |
//! |----------|------------|-------|--------|
//! | identifier | `"name"` | `` `name` `` | `"name"` |
//! | placeholder | `$1` | `?` | `$1` |
//! | string aggregate | `string_agg(f, 'd')` | `GROUP_CONCAT(f SEPARATOR 'd')` | `group_concat(f)` |
//! | substring test | `position($1 in c) > 0` | `instr(c, ?) > 0` | `instr(c, $1) > 0` |
//!
//! SQLite's aggregate ignores the delimiter and always joins with commas.
//!
//! ## Example
//!
//! ```rust
//! use sqlstore_dialect::{DialectAdapter, EngineKind};
//!
//! let adapter = DialectAdapter::new(
//!     EngineKind::Postgres,
//!     "postgres://localhost/boards?binary_parameters=yes",
//! )
//! .unwrap();
//!
//! assert!(adapter.binary_parameters());
//! assert_eq!(adapter.quote_identifier("blocks"), "\"blocks\"");
//! assert_eq!(
//!     adapter.rebind("SELECT id FROM blocks WHERE board_id = ?"),
//!     "SELECT id FROM blocks WHERE board_id = $1"
//! );
//! ```

mod adapter;
pub mod connection;
pub mod dialect;
mod engine;
pub mod error;
pub mod interval;
pub mod rebind;

pub use adapter::DialectAdapter;
pub use dialect::{MysqlDialect, PostgresDialect, SqlDialect, SqliteDialect};
pub use engine::EngineKind;
pub use error::{DialectError, Result};
