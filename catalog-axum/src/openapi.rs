//! The generated OpenAPI document and a browsable view of it.

use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::{OpenApi, Tag},
    transform::TransformOpenApi,
};
use axum::{
    Extension, Json,
    response::{Html, IntoResponse},
};

const VIEWER: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Product Catalog API</title>
    <script type="module" src="https://unpkg.com/rapidoc/dist/rapidoc-min.js"></script>
  </head>
  <body>
    <rapi-doc spec-url="/docs/api.json"
        heading-text="Product Catalog"
        render-style="focused"
        show-method-in-nav-bar="as-colored-text"
    ></rapi-doc>
  </body>
</html>"#;

/// Routes under `/docs`: the viewer page and the raw document it renders.
pub(crate) fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route("/", get(viewer))
        .route("/api.json", get(document))
}

async fn viewer() -> impl IntoApiResponse {
    Html(VIEWER).into_response()
}

/// The OpenAPI document, shared through an `Extension` by the main router.
async fn document(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

/// Document-level metadata for the OpenAPI output.
pub(crate) fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Product Catalog API")
        .summary("Create, read, update and delete products.")
        .description(
            "Every operation maps directly onto the product service. \
             Writes are committed before the response is sent.",
        )
        .version(env!("CARGO_PKG_VERSION"))
        .tag(Tag {
            name: "products".into(),
            description: Some("CRUD operations on products".into()),
            ..Default::default()
        })
}
