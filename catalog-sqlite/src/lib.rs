#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the catalog-core crate.
//! [catalog-core]: https://docs.rs/catalog_core/latest/catalog_core/index.html
#![doc = include_str!("../README.md")]

use sqlx::sqlite;
use std::{str::FromStr, time::Duration};

pub mod config;
mod context;
mod error;
mod r#impl;
mod repository;

pub use context::Context;
pub use error::Error;
pub use repository::{GenericRepository, Table};

use config::SqliteConfig;

/// SQLite database implementation of the catalog ports.
///
/// The pool is capped at a single connection. Every [`Context`] holds that
/// connection for the lifetime of its transaction, so units of work are
/// serialized and SQLite never sees competing writers.
///
/// # Example
///
/// ```no_run
/// # use catalog_sqlite::{Db, config::SqliteConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SqliteConfig::default();
/// let db = Db::open(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Db {
    /// Connection pool shared by every context (limited to 1 connection)
    pub pool: sqlx::Pool<sqlx::Sqlite>,
}

impl Db {
    /// Open a connection to the specified SQLite database.
    ///
    /// Creates a new database if one doesn't exist (when `create_if_missing` is true)
    /// and applies all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the connection fails or a migration cannot be applied.
    pub async fn open(config: &SqliteConfig) -> Result<Self, Error> {
        let db_path = config
            .database_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        let options =
            sqlite::SqliteConnectOptions::from_str(db_path.as_deref().unwrap_or(":memory:"))?
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true)
                .journal_mode(sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlite::SqliteSynchronous::Normal)
                .pragma("temp_store", "memory")
                .create_if_missing(config.create_if_missing);

        let mut pool = sqlite::SqlitePoolOptions::new().max_connections(1);
        if db_path.is_none() {
            // an in-memory database disappears with its last connection
            pool = pool.idle_timeout(None).max_lifetime(None);
        }
        let pool = pool.connect_with(options).await?;

        // Run any pending migrations before returning
        sqlx::migrate!("./schema").run(&pool).await?;

        tracing::debug!(
            path = db_path.as_deref().unwrap_or(":memory:"),
            "opened catalog database"
        );

        Ok(Self { pool })
    }

    /// Begin a new unit of work.
    ///
    /// Nothing written through the returned context is visible to other
    /// contexts until [`Context::save`] is called.
    pub async fn context(&self) -> Result<Context, Error> {
        Ok(Context::new(self.pool.begin().await?))
    }
}
