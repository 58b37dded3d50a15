//! The SQL store shell.

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use sqlstore_dialect::{DialectAdapter, EngineKind};
use tracing::{error, info};

use crate::error::Result;
use crate::params::StoreParams;

/// A SQL-backed store on PostgreSQL, MySQL or SQLite.
///
/// The store owns the connection pool and a [`DialectAdapter`] fixed to the
/// configured engine. Query code asks the store for engine-specific
/// fragments and runs statements through [`SqlStore::db_handle`].
#[derive(Debug)]
pub struct SqlStore {
    db: AnyPool,
    adapter: DialectAdapter,
    table_prefix: String,
    is_single_user: bool,
}

impl SqlStore {
    /// Creates a store over an existing pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the connection
    /// string cannot be inspected.
    pub fn new(params: StoreParams, db: AnyPool) -> Result<Self> {
        let engine = params.check_valid()?;
        info!(db_type = %engine, "Connecting database");

        let adapter = DialectAdapter::new(engine, &params.connection_string)
            .inspect_err(|e| error!(error = %e, "Cannot compute binary parameter"))?;

        Ok(Self {
            db,
            adapter,
            table_prefix: params.table_prefix,
            is_single_user: params.is_single_user,
        })
    }

    /// Opens a pool for the configured connection string and creates a store
    /// over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the database cannot
    /// be reached.
    pub async fn connect(params: StoreParams) -> Result<Self> {
        params.check_valid()?;
        sqlx::any::install_default_drivers();

        let db = AnyPoolOptions::new()
            .connect(&params.connection_string)
            .await
            .inspect_err(|e| error!(error = %e, "Cannot open database pool"))?;

        Self::new(params, db)
    }

    /// Closes the connection pool.
    pub async fn shutdown(&self) {
        info!(db_type = %self.adapter.engine(), "Closing database");
        self.db.close().await;
    }

    /// Returns the raw pool for callers that run their own SQL.
    #[must_use]
    pub const fn db_handle(&self) -> &AnyPool {
        &self.db
    }

    /// Returns the engine the store runs on.
    #[must_use]
    pub const fn db_type(&self) -> EngineKind {
        self.adapter.engine()
    }

    /// Returns the dialect adapter.
    #[must_use]
    pub const fn dialect(&self) -> &DialectAdapter {
        &self.adapter
    }

    /// Returns whether PostgreSQL binary parameters are enabled.
    #[must_use]
    pub const fn is_binary_param(&self) -> bool {
        self.adapter.binary_parameters()
    }

    /// Returns the table prefix.
    #[must_use]
    pub fn table_prefix(&self) -> &str {
        &self.table_prefix
    }

    /// Returns whether the store serves a single user.
    #[must_use]
    pub const fn is_single_user(&self) -> bool {
        self.is_single_user
    }

    /// Returns the quoted, prefixed name of `table`.
    #[must_use]
    pub fn table_name(&self, table: &str) -> String {
        table_name(&self.adapter, &self.table_prefix, table)
    }

    /// Rewrites `?` markers in `sql` into this store's placeholders.
    #[must_use]
    pub fn rebind(&self, sql: &str) -> String {
        self.adapter.rebind(sql)
    }
}

/// Returns `prefix` + `table`, quoted for the adapter's engine.
#[must_use]
pub fn table_name(adapter: &DialectAdapter, prefix: &str, table: &str) -> String {
    adapter.quote_identifier(&format!("{prefix}{table}"))
}
