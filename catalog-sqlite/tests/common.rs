#![allow(dead_code)]

use catalog_core::ports::Entity;
use catalog_sqlite::{Db, Table, config::SqliteConfig};
use sqlx::{Row as _, Sqlite, query_builder::Separated, sqlite::SqliteRow};

/// A fresh in-memory database with the migrations applied.
pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

/// A second entity, unknown to the library, to exercise the repository
/// without any product-specific code.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

impl Tag {
    pub fn new(label: &str) -> Self {
        Self {
            id: 0,
            label: label.to_owned(),
        }
    }
}

impl Entity for Tag {
    type Id = i64;

    const NAME: &'static str = "tag";

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Table for Tag {
    const TABLE: &'static str = "tag";
    const KEY: &'static str = "tag_id";
    const COLUMNS: &'static [&'static str] = &["label"];

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("tag_id")?,
            label: row.try_get("label")?,
        })
    }

    fn bind_columns(&self, values: &mut Separated<'_, 'static, Sqlite, &'static str>) {
        values.push_bind(self.label.clone());
    }
}

/// Open a database that also has a `tag` table.
pub async fn open_with_tags() -> anyhow::Result<Db> {
    let db = open().await?;
    sqlx::query(
        r#"
        create table tag (
            tag_id integer primary key autoincrement,
            label text not null
        )
        "#,
    )
    .execute(&db.pool)
    .await?;
    Ok(db)
}
