use crate::{Db, Error, Table};
use catalog_core::{
    models::Product,
    ports::{ProductService, Repository as _},
};
use sqlx::{Row as _, Sqlite, query_builder::Separated, sqlite::SqliteRow};

impl Table for Product {
    const TABLE: &'static str = "product";
    const KEY: &'static str = "id";
    const COLUMNS: &'static [&'static str] = &["name", "price"];

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }

    fn bind_columns(&self, values: &mut Separated<'_, 'static, Sqlite, &'static str>) {
        values.push_bind(self.name.clone()).push_bind(self.price);
    }
}

impl ProductService for Db {
    type Error = Error;

    async fn get_product_by_id(&self, product_id: i64) -> Result<Option<Product>, Self::Error> {
        let mut context = self.context().await?;
        context.repository::<Product>().get_by_id(product_id).await
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, Self::Error> {
        let mut context = self.context().await?;
        context.repository::<Product>().get_all().await
    }

    async fn create_product(&self, product: Product) -> Result<i64, Self::Error> {
        let mut context = self.context().await?;
        let product_id = context.repository::<Product>().insert(&product).await?;
        context.save().await?;

        tracing::info!(product_id, "created product");
        Ok(product_id)
    }

    async fn update_product(&self, product_id: i64, product: Product) -> Result<bool, Self::Error> {
        let mut context = self.context().await?;
        let updated = context
            .repository::<Product>()
            .update(&product.with_id(product_id))
            .await?;

        if updated {
            context.save().await?;
            tracing::info!(product_id, "updated product");
        }
        Ok(updated)
    }

    async fn delete_product(&self, product_id: i64) -> Result<bool, Self::Error> {
        let mut context = self.context().await?;
        let deleted = context
            .repository::<Product>()
            .delete_by_id(product_id)
            .await?;

        if deleted {
            context.save().await?;
            tracing::info!(product_id, "deleted product");
        }
        Ok(deleted)
    }
}
