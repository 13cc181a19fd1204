use thiserror::Error;

/// Database operations generate errors for multiple reasons, this is a unified
/// error type that our functions can return.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from SQLite operations
    #[error("sql error: {0}")]
    Sql(#[from] sqlx::Error),

    /// Error during database migrations
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A lookup that requires a match found none
    #[error("no {entity} matched")]
    NotFound {
        /// The name of the entity type
        entity: &'static str,
    },

    /// A lookup that requires exactly one match found several
    #[error("{count} {entity} records matched where one was expected")]
    Ambiguous {
        /// The name of the entity type
        entity: &'static str,
        /// How many records matched
        count: usize,
    },
}
