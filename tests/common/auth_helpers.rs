//! Authentication test helpers
//!
//! Header builders and a login shortcut for driving the API through
//! `axum_test::TestServer`.

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD, Engine};
use user_api::backend::auth::IssuedToken;

pub const TEST_USER: &str = "admin";
pub const TEST_PASS: &str = "supersecret";
pub const TEST_SECRET: &str = "integration-test-secret";

/// `Authorization: Basic ...` for a username/password pair
pub fn basic_header(username: &str, password: &str) -> (HeaderName, HeaderValue) {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    raw_auth_header(&format!("Basic {encoded}"))
}

/// `Authorization: Bearer <token>`
pub fn bearer_header(token: &str) -> (HeaderName, HeaderValue) {
    raw_auth_header(&format!("Bearer {token}"))
}

/// `Authorization` with an arbitrary value
pub fn raw_auth_header(value: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(value).expect("header value should be valid ASCII"),
    )
}

/// Log in with the test credentials and return the issued token
pub async fn login(server: &TestServer) -> IssuedToken {
    let (name, value) = basic_header(TEST_USER, TEST_PASS);
    let response = server.post("/login").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<IssuedToken>()
}
