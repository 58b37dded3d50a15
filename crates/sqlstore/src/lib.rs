//! SQL store shell with dialect-aware helpers.
//!
//! `sqlstore` wraps an `sqlx` [`AnyPool`](sqlx::AnyPool) together with a
//! [`DialectAdapter`](sqlstore_dialect::DialectAdapter) so query code can run
//! the same logical statement on PostgreSQL, MySQL and SQLite.
//!
//! # Example
//!
//! ```rust,ignore
//! use sqlstore::{SqlStore, StoreParams};
//!
//! let params = StoreParams::new("sqlite3", "sqlite::memory:").table_prefix("focalboard_");
//! let store = SqlStore::connect(params).await?;
//!
//! let sql = format!(
//!     "SELECT {} FROM {} WHERE {}",
//!     store.dialect().concat_aggregate("id", ","),
//!     store.table_name("blocks"),
//!     store.dialect().contains_predicate(1, "title"),
//! );
//! let ids: (String,) = sqlx::query_as(&sql)
//!     .bind("roadmap")
//!     .fetch_one(store.db_handle())
//!     .await?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the placeholder for the third parameter
//! sqlstore-sql --engine postgres placeholder 3
//!
//! # Rewrite a statement written with `?` markers
//! sqlstore-sql --engine sqlite3 rebind "SELECT * FROM blocks WHERE id = ?"
//! ```

pub mod error;
pub mod params;
pub mod store;

pub use error::{Result, StoreError};
pub use params::StoreParams;
pub use store::SqlStore;
pub use sqlstore_dialect as dialect;
