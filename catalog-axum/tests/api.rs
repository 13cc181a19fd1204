use axum::http::StatusCode;
use axum_test::TestServer;
use catalog_axum::router;
use catalog_core::models::Product;
use catalog_sqlite::{Db, config::SqliteConfig};
use rstest::*;
use serde_json::json;

#[fixture]
async fn server() -> TestServer {
    let db = Db::open(&SqliteConfig::default()).await.unwrap();
    TestServer::new(router(db)).unwrap()
}

async fn create(server: &TestServer, name: &str, price: f64) -> i64 {
    let response = server
        .post("/api/Product")
        .json(&json!({ "name": name, "price": price }))
        .await;
    response.assert_status_ok();
    response.json::<i64>()
}

#[rstest]
#[test_log::test(tokio::test)]
async fn empty_catalog_is_not_found(#[future] server: TestServer) {
    let server = server.await;

    let response = server.get("/api/Product").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Product Not Found");
    let content_type = response.header("content-type");
    assert_eq!(content_type, "text/plain; charset=utf-8");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn product_lifecycle(#[future] server: TestServer) {
    let server = server.await;

    let apple = create(&server, "Apple", 1.5).await;
    let pear = create(&server, "Pear", 2.0).await;
    assert!(apple > 0);
    assert_ne!(apple, pear);

    let product = server
        .get(&format!("/api/Product/{apple}"))
        .await
        .json::<Product>();
    assert_eq!(product, Product::new("Apple", 1.5).with_id(apple));

    let mut products = server.get("/api/Product").await.json::<Vec<Product>>();
    products.sort_by_key(|p| p.id);
    assert_eq!(
        products,
        vec![
            Product::new("Apple", 1.5).with_id(apple),
            Product::new("Pear", 2.0).with_id(pear),
        ]
    );

    let updated = server
        .put(&format!("/api/Product/{apple}"))
        .json(&json!({ "id": pear, "name": "Red Apple", "price": 1.75 }))
        .await
        .json::<bool>();
    assert!(updated);
    assert_eq!(
        server
            .get(&format!("/api/Product/{apple}"))
            .await
            .json::<Product>(),
        Product::new("Red Apple", 1.75).with_id(apple)
    );
    // the body id did not redirect the update
    assert_eq!(
        server
            .get(&format!("/api/Product/{pear}"))
            .await
            .json::<Product>(),
        Product::new("Pear", 2.0).with_id(pear)
    );

    let deleted = server
        .delete(&format!("/api/Product/{apple}"))
        .await
        .json::<bool>();
    assert!(deleted);

    let response = server.get(&format!("/api/Product/{apple}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("No Product Found for this Id");

    // a second delete finds nothing to remove
    assert!(
        !server
            .delete(&format!("/api/Product/{apple}"))
            .await
            .json::<bool>()
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn missing_product_is_false(#[future] server: TestServer) {
    let server = server.await;
    let apple = create(&server, "Apple", 1.5).await;
    let missing = apple + 1;

    let updated = server
        .put(&format!("/api/Product/{missing}"))
        .json(&json!({ "name": "Ghost", "price": 0.0 }))
        .await
        .json::<bool>();
    assert!(!updated);

    let deleted = server
        .delete(&format!("/api/Product/{missing}"))
        .await
        .json::<bool>();
    assert!(!deleted);

    assert_eq!(
        server.get("/api/Product").await.json::<Vec<Product>>(),
        vec![Product::new("Apple", 1.5).with_id(apple)]
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
#[test_log::test(tokio::test)]
async fn non_positive_ids_are_rejected(#[future] server: TestServer, #[case] id: i64) {
    let server = server.await;
    let apple = create(&server, "Apple", 1.5).await;

    let updated = server
        .put(&format!("/api/Product/{id}"))
        .json(&json!({ "id": apple, "name": "Ghost", "price": 0.0 }))
        .await;
    updated.assert_status_ok();
    assert!(!updated.json::<bool>());

    let deleted = server.delete(&format!("/api/Product/{id}")).await;
    deleted.assert_status_ok();
    assert!(!deleted.json::<bool>());

    // nothing changed
    assert_eq!(
        server.get("/api/Product").await.json::<Vec<Product>>(),
        vec![Product::new("Apple", 1.5).with_id(apple)]
    );
}

#[rstest]
#[case(0, json!({}))]
#[case(-5, json!({ "name": "Ghost" }))]
#[test_log::test(tokio::test)]
async fn non_positive_update_skips_the_body(
    #[future] server: TestServer,
    #[case] id: i64,
    #[case] body: serde_json::Value,
) {
    let server = server.await;

    let response = server.put(&format!("/api/Product/{id}")).json(&body).await;
    response.assert_status_ok();
    assert!(!response.json::<bool>());
}

#[rstest]
#[test_log::test(tokio::test)]
async fn incomplete_update_body_is_rejected(#[future] server: TestServer) {
    let server = server.await;
    let apple = create(&server, "Apple", 1.5).await;

    server
        .put(&format!("/api/Product/{apple}"))
        .json(&json!({ "name": "Ghost" }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        server
            .get(&format!("/api/Product/{apple}"))
            .await
            .json::<Product>(),
        Product::new("Apple", 1.5).with_id(apple)
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn create_ignores_body_id(#[future] server: TestServer) {
    let server = server.await;

    let id = server
        .post("/api/Product")
        .json(&json!({ "id": 99, "name": "Apple", "price": 1.5 }))
        .await
        .json::<i64>();
    assert_ne!(id, 99);
    server
        .get("/api/Product/99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn malformed_id_is_a_bad_request(#[future] server: TestServer) {
    let server = server.await;

    server
        .get("/api/Product/apple")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn health_and_docs(#[future] server: TestServer) {
    let server = server.await;

    server
        .get("/health")
        .await
        .assert_json(&json!({ "status": "ok" }));

    let api = server
        .get("/docs/api.json")
        .await
        .json::<serde_json::Value>();
    assert_eq!(api["info"]["title"], "Product Catalog API");
    let paths = api["paths"].as_object().unwrap();
    assert!(
        paths
            .keys()
            .any(|path| path.trim_end_matches('/') == "/api/Product")
    );
    assert!(api["paths"]["/api/Product/{id}"]["delete"].is_object());
}
