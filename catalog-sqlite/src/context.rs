//! The per-request unit of work.

use crate::{Error, GenericRepository, Table};

/// A handle on one database transaction.
///
/// Repositories borrowed from the same context share its transaction, so
/// reads observe earlier staged writes. Dropping the context without calling
/// [`save`](Self::save) discards everything it staged.
pub struct Context {
    tx: sqlx::Transaction<'static, sqlx::Sqlite>,
}

impl Context {
    pub(crate) fn new(tx: sqlx::Transaction<'static, sqlx::Sqlite>) -> Self {
        Self { tx }
    }

    /// Borrow a repository for entity type `E`.
    pub fn repository<E: Table>(&mut self) -> GenericRepository<'_, E> {
        GenericRepository::new(self)
    }

    /// Commit every change staged in this context.
    pub async fn save(self) -> Result<(), Error> {
        self.tx.commit().await?;
        tracing::trace!("saved context");
        Ok(())
    }

    pub(crate) fn connection(&mut self) -> &mut sqlx::SqliteConnection {
        &mut self.tx
    }
}
