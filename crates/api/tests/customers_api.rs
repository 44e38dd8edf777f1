mod common;

use axum::http::StatusCode;
use common::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn customer_crud_round_trip() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({"id": "c1", "name": "Test Customer"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, customers) = send(&app, "GET", "/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    let customers = customers.as_array().expect("customers array");
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["id"], "c1");

    let (status, customer) = send(&app, "GET", "/customers/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customer["name"], "Test Customer");

    let (status, _) = send(
        &app,
        "PUT",
        "/customers/c1",
        Some(json!({"name": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, customer) = send(&app, "GET", "/customers/c1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customer["name"], "Renamed");

    let (status, _) = send(&app, "DELETE", "/customers/c1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/customers/c1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_customer_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/customers/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn malformed_customer_body_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/customers", Some(json!({"id": "c1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({"id": "c1", "name": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
