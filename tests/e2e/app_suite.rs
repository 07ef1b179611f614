//! E2E test suite for user-api

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use user_api::backend::auth::IssuedToken;
use user_api::backend::server::create_app;

use crate::common::{basic_header, bearer_header, test_config, TEST_PASS, TEST_USER};

async fn create_test_server() -> TestServer {
    let app = create_app(test_config()).await.unwrap();
    TestServer::builder()
        .http_transport()
        .build(app)
        .unwrap()
}

#[tokio::test]
async fn test_full_session() {
    let server = create_test_server().await;

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = basic_header(TEST_USER, TEST_PASS);
    let response = server.post("/login").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let issued: IssuedToken = response.json();

    let (name, value) = bearer_header(&issued.token);
    let response = server.get("/users").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));

    let (name, value) = bearer_header(&issued.token);
    let response = server
        .post("/api/data")
        .add_header(name, value)
        .json(&json!({ "hello": "world" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unreachable_database_fails_startup() {
    let mut config = test_config();
    config.database_url = "sqlite:///nonexistent-dir/definitely/missing.db".to_string();

    assert!(create_app(config).await.is_err());
}
