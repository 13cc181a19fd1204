//! REST API endpoints for product operations.
//!
//! The routes map one-to-one onto the [`ProductService`](catalog_core::ports::ProductService)
//! operations and return the service results unchanged.

use crate::ApiApplication;
use aide::axum::{ApiRouter, routing::get_with};

mod crud;

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct Id {
    /// The unique identifier of the product
    id: i64,
}

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route(
            "/",
            get_with(crud::list_products::<T>, |op| {
                op.tag("products").summary("List every product")
            })
            .post_with(crud::create_product::<T>, |op| {
                op.tag("products").summary("Create a product")
            }),
        )
        .api_route(
            "/{id}",
            get_with(crud::read_product::<T>, |op| {
                op.tag("products").summary("Retrieve a product")
            })
            .put_with(crud::update_product::<T>, |op| {
                op.tag("products").summary("Replace a product")
            })
            .delete_with(crud::delete_product::<T>, |op| {
                op.tag("products").summary("Remove a product")
            }),
        )
}
