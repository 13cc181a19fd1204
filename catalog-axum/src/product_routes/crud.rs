use super::Id;
use crate::ApiApplication;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use catalog_core::models::Product;
use tracing::{Level, event};

/// List every product.
///
/// # Returns
///
/// - `200 OK`: All products, in no particular order
/// - `404 Not Found`: There are no products at all
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
) -> Result<Json<Vec<Product>>, (StatusCode, String)> {
    let products = app.get_all_products().await.map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to get products".to_string(),
        )
    })?;

    // An empty catalog is reported as missing rather than as an empty list.
    if products.is_empty() {
        Err((StatusCode::NOT_FOUND, "Product Not Found".to_string()))
    } else {
        Ok(Json(products))
    }
}

/// Retrieve a product.
///
/// # Returns
///
/// - `200 OK`: Product data
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: Database query failed
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { id }): Path<Id>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let product = app
        .get_product_by_id(id)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to get product {}", id),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            "No Product Found for this Id".to_string(),
        ))?;

    Ok(Json(product))
}

/// Create a new product.
///
/// # Request Body
///
/// The product values. Any `id` in the body is ignored; the store assigns one.
///
/// # Returns
///
/// - `200 OK`: The id of the new product
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn create_product<T: ApiApplication>(
    State(app): State<T>,
    Json(product): Json<Product>,
) -> Result<Json<i64>, (StatusCode, String)> {
    app.create_product(product).await.map(Json).map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to create product".to_string(),
        )
    })
}

/// Replace a product's values.
///
/// # Request Body
///
/// The new product values. The path id takes precedence over any `id` in
/// the body. The body is not inspected when the id is not positive.
///
/// # Returns
///
/// - `200 OK`: `true` if the product was replaced, `false` if the id is not
///   positive or no such product exists
/// - `4xx`: The body is not a valid product
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn update_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { id }): Path<Id>,
    body: Result<Json<Product>, JsonRejection>,
) -> Result<Json<bool>, (StatusCode, String)> {
    if id <= 0 {
        return Ok(Json(false));
    }

    let Json(product) = body.map_err(|err| (err.status(), err.body_text()))?;

    app.update_product(id, product)
        .await
        .map(Json)
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to update product {}", id),
            )
        })
}

/// Remove a product.
///
/// # Returns
///
/// - `200 OK`: `true` if the product was removed, `false` if the id is not
///   positive or no such product exists
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn delete_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { id }): Path<Id>,
) -> Result<Json<bool>, (StatusCode, String)> {
    if id <= 0 {
        return Ok(Json(false));
    }

    app.delete_product(id).await.map(Json).map_err(|err| {
        event!(Level::ERROR, err = err.to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to delete product {}", id),
        )
    })
}
