#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the catalog-core crate.
//! [catalog-core]: https://docs.rs/catalog_core/latest/catalog_core/index.html
#![doc = include_str!("../README.md")]

mod product_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use catalog_core::ports::ProductService;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router serving the given application state.
pub fn router<T: ApiApplication>(app: T) -> axum::Router {
    router_with_schema(app).0
}

/// Construct the API router along with the OpenAPI document describing it.
pub fn router_with_schema<T: ApiApplication>(app: T) -> (axum::Router, OpenApi) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/api/Product", product_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api.clone()))) // Arc is very important here or you will face massive memory and performance issues
        .layer(TraceLayer::new_for_http())
        .with_state(app);
    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication: Clone + Send + Sync + 'static + ProductService {}

// this is the blanket implementation
impl<T> ApiApplication for T where T: Clone + Send + Sync + 'static + ProductService {}
