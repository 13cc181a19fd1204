//! The generic repository and the table mapping it relies on.

use crate::{Context, Error};
use catalog_core::ports::{Entity, Repository};
use sqlx::{QueryBuilder, Sqlite, query_builder::Separated, sqlite::SqliteRow};
use std::marker::PhantomData;

/// How an [`Entity`] is laid out in a SQLite table.
///
/// The table must have a single primary-key column named by [`KEY`](Self::KEY)
/// that SQLite assigns on insert, plus the value columns listed in
/// [`COLUMNS`](Self::COLUMNS). [`bind_columns`](Self::bind_columns) must push
/// exactly one value per entry of `COLUMNS`, in the same order.
pub trait Table:
    Entity<
        Id: for<'q> sqlx::Encode<'q, Sqlite> + for<'r> sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
    >
{
    /// The table name
    const TABLE: &'static str;

    /// The primary key column
    const KEY: &'static str;

    /// Every non-key column
    const COLUMNS: &'static [&'static str];

    /// Decode an entity from a row holding the key and every value column.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;

    /// Push the entity's values for [`COLUMNS`](Self::COLUMNS).
    fn bind_columns(&self, values: &mut Separated<'_, 'static, Sqlite, &'static str>);
}

/// A [`Repository`] for any [`Table`], bound to a [`Context`].
///
/// Predicate queries fetch the whole table and filter in process.
pub struct GenericRepository<'c, E> {
    context: &'c mut Context,
    entity: PhantomData<fn() -> E>,
}

impl<'c, E: Table> GenericRepository<'c, E> {
    pub(crate) fn new(context: &'c mut Context) -> Self {
        Self {
            context,
            entity: PhantomData,
        }
    }

    fn select() -> String {
        format!(
            "select {}, {} from {}",
            E::KEY,
            E::COLUMNS.join(", "),
            E::TABLE
        )
    }
}

impl<'c, E: Table> Repository<E> for GenericRepository<'c, E> {
    type Error = Error;

    async fn get_all(&mut self) -> Result<Vec<E>, Self::Error> {
        let sql = Self::select();
        let rows = sqlx::query(&sql)
            .fetch_all(self.context.connection())
            .await?;

        rows.iter()
            .map(E::from_row)
            .collect::<Result<_, _>>()
            .map_err(Into::into)
    }

    async fn get_by_id(&mut self, id: E::Id) -> Result<Option<E>, Self::Error> {
        let sql = format!("{} where {} = $1", Self::select(), E::KEY);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.context.connection())
            .await?;

        Ok(row.as_ref().map(E::from_row).transpose()?)
    }

    async fn get_many<P>(&mut self, predicate: P) -> Result<Vec<E>, Self::Error>
    where
        P: Fn(&E) -> bool + Send,
    {
        let entities = self.get_all().await?;
        Ok(entities.into_iter().filter(|e| predicate(e)).collect())
    }

    async fn get_one<P>(&mut self, predicate: P) -> Result<Option<E>, Self::Error>
    where
        P: Fn(&E) -> bool + Send,
    {
        let entities = self.get_all().await?;
        Ok(entities.into_iter().find(|e| predicate(e)))
    }

    async fn get_single<P>(&mut self, predicate: P) -> Result<E, Self::Error>
    where
        P: Fn(&E) -> bool + Send,
    {
        let mut matches = self.get_many(predicate).await?;
        match matches.len() {
            0 => Err(Error::NotFound { entity: E::NAME }),
            1 => Ok(matches.remove(0)),
            count => Err(Error::Ambiguous {
                entity: E::NAME,
                count,
            }),
        }
    }

    async fn get_first<P>(&mut self, predicate: P) -> Result<E, Self::Error>
    where
        P: Fn(&E) -> bool + Send,
    {
        self.get_one(predicate)
            .await?
            .ok_or(Error::NotFound { entity: E::NAME })
    }

    async fn insert(&mut self, entity: &E) -> Result<E::Id, Self::Error> {
        let mut query_builder = QueryBuilder::<Sqlite>::new(format!(
            "insert into {} ({}) values (",
            E::TABLE,
            E::COLUMNS.join(", ")
        ));
        entity.bind_columns(&mut query_builder.separated(", "));
        query_builder.push(") returning ").push(E::KEY);

        let id = query_builder
            .build_query_scalar::<E::Id>()
            .fetch_one(self.context.connection())
            .await?;

        tracing::debug!(entity = E::NAME, %id, "staged insert");
        Ok(id)
    }

    async fn update(&mut self, entity: &E) -> Result<bool, Self::Error> {
        // a row-value assignment replaces every column at once
        let mut query_builder = QueryBuilder::<Sqlite>::new(format!(
            "update {} set ({}) = (",
            E::TABLE,
            E::COLUMNS.join(", ")
        ));
        entity.bind_columns(&mut query_builder.separated(", "));
        query_builder
            .push(format!(") where {} = ", E::KEY))
            .push_bind(entity.id());

        let result = query_builder
            .build()
            .execute(self.context.connection())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&mut self, id: E::Id) -> Result<bool, Self::Error> {
        let sql = format!("delete from {} where {} = $1", E::TABLE, E::KEY);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.context.connection())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_where<P>(&mut self, predicate: P) -> Result<u64, Self::Error>
    where
        P: Fn(&E) -> bool + Send,
    {
        let ids = self
            .get_many(predicate)
            .await?
            .iter()
            .map(E::id)
            .collect::<Vec<_>>();

        let mut removed = 0;
        for id in ids {
            if self.delete_by_id(id).await? {
                removed += 1;
            }
        }

        tracing::debug!(entity = E::NAME, removed, "staged bulk delete");
        Ok(removed)
    }

    async fn exists(&mut self, id: E::Id) -> Result<bool, Self::Error> {
        let sql = format!(
            "select exists(select 1 from {} where {} = $1)",
            E::TABLE,
            E::KEY
        );
        let found = sqlx::query_scalar::<_, i64>(&sql)
            .bind(id)
            .fetch_one(self.context.connection())
            .await?;

        Ok(found != 0)
    }
}
