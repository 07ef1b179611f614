//! Sample data and public route integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{bearer_header, login, TestApp};

#[tokio::test]
async fn test_welcome_route_is_public() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Welcome to the React API Server!");
}

#[tokio::test]
async fn test_get_data() {
    let app = TestApp::new().await;
    let token = login(&app.server).await.token;

    let (name, value) = bearer_header(&token);
    let response = app.server.get("/api/data").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "This is some sample data." })
    );
}

#[tokio::test]
async fn test_post_data_echoes_payload() {
    let app = TestApp::new().await;
    let token = login(&app.server).await.token;
    let payload = json!({ "item": "widget", "quantity": 3 });

    let (name, value) = bearer_header(&token);
    let response = app
        .server
        .post("/api/data")
        .add_header(name, value)
        .json(&payload)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Data received successfully.");
    assert_eq!(body["data"], payload);
}

#[tokio::test]
async fn test_data_requires_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/data").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app.server.post("/api/data").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
