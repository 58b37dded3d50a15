//! sqlstore-sql CLI
//!
//! Prints engine-specific SQL fragments, for checking what a store will
//! generate without connecting to a database.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlstore::dialect::DialectAdapter;
use sqlstore::store::table_name;
use sqlstore::StoreParams;

/// Engine-specific SQL fragments for PostgreSQL, MySQL and SQLite.
#[derive(Parser)]
#[command(name = "sqlstore-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database engine (postgres, mysql or sqlite3).
    #[arg(short, long, env = "DB_TYPE", default_value = "sqlite3")]
    engine: String,

    /// Database URL, inspected for engine-specific flags.
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:db.sqlite3")]
    database: String,

    /// Prefix prepended to table names.
    #[arg(short, long, default_value = "")]
    table_prefix: String,

    /// JSON config file with store parameters (overrides the flags above).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote an identifier.
    Quote {
        /// Table or column name.
        name: String,
    },

    /// Quote a table name with the table prefix applied.
    Table {
        /// Table name without prefix.
        name: String,
    },

    /// Print the placeholder for a 1-based parameter position.
    Placeholder {
        /// Parameter position.
        ordinal: usize,
    },

    /// Print a string aggregate over a field.
    Concat {
        /// Field expression.
        field: String,

        /// Separator between values (ignored on SQLite).
        #[arg(short, long, default_value = ",")]
        delimiter: String,
    },

    /// Print a substring predicate over a column.
    Contains {
        /// Parameter position of the searched value.
        ordinal: usize,

        /// Column expression.
        column: String,
    },

    /// Print the timestamp for "now minus an interval", e.g. "2 days".
    Since {
        /// Interval such as "2 days", "1 month" or "3 years".
        interval: String,
    },

    /// Report whether binary parameters are enabled.
    BinaryParams,

    /// Rewrite `?` markers into the engine's placeholders.
    Rebind {
        /// SQL statement.
        sql: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading store parameters");
            StoreParams::from_json_file(path)?
        }
        None => StoreParams::new(cli.engine, cli.database).table_prefix(cli.table_prefix),
    };
    let engine = params.check_valid()?;
    let adapter = DialectAdapter::new(engine, &params.connection_string)?;

    let output = match cli.command {
        Commands::Quote { name } => adapter.quote_identifier(&name),
        Commands::Table { name } => table_name(&adapter, &params.table_prefix, &name),
        Commands::Placeholder { ordinal } => {
            anyhow::ensure!(ordinal >= 1, "parameter positions start at 1");
            adapter.placeholder(ordinal)
        }
        Commands::Concat { field, delimiter } => adapter.concat_aggregate(&field, &delimiter),
        Commands::Contains { ordinal, column } => {
            anyhow::ensure!(ordinal >= 1, "parameter positions start at 1");
            adapter.contains_predicate(ordinal, &column)
        }
        Commands::Since { interval } => adapter.relative_timestamp(&interval)?,
        Commands::BinaryParams => adapter.binary_parameters().to_string(),
        Commands::Rebind { sql } => adapter.rebind(&sql),
    };

    println!("{output}");
    Ok(())
}
