mod common;

use axum::http::StatusCode;
use common::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn product_crud_round_trip() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({"id": "p1", "name": "Test Product", "price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, products) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = products.as_array().expect("products array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], "p1");
    assert_eq!(products[0]["price"], 9.99);

    let (status, product) = send(&app, "GET", "/products/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["name"], "Test Product");

    let (status, _) = send(
        &app,
        "PUT",
        "/products/p1",
        Some(json!({"name": "Renamed", "price": 10.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, product) = send(&app, "GET", "/products/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["name"], "Renamed");
    assert_eq!(product["price"], 10.99);

    let (status, _) = send(&app, "DELETE", "/products/p1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/products/p1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/products/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn malformed_product_body_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/products", Some(json!({"id": "p1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({"id": "", "name": "x", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_product_id_is_a_store_error() {
    let app = test_app().await;

    let body = json!({"id": "p1", "name": "Test Product", "price": 9.99});
    let (status, _) = send(&app, "POST", "/products", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/products", Some(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
