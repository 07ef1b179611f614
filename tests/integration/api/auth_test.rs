//! Authentication API integration tests
//!
//! Tests for `POST /login` and bearer verification on protected routes.

use axum::http::{header::WWW_AUTHENTICATE, StatusCode};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use pretty_assertions::assert_eq;
use serde_json::Value;
use user_api::backend::auth::sessions::{TokenClaims, TokenService};
use user_api::backend::error::BASIC_CHALLENGE;
use user_api::backend::server::config::TokenLifetime;

use crate::common::{basic_header, bearer_header, login, raw_auth_header, TestApp, TEST_SECRET};

fn decode_payload(token: &str) -> Value {
    let payload = token.split('.').nth(1).expect("token should have a payload");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("payload should be base64url");
    serde_json::from_slice(&bytes).expect("payload should be JSON")
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let (name, value) = basic_header("admin", "supersecret");

    let response = app.server.post("/login").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], "1h");

    let token = body["token"].as_str().unwrap();
    assert_eq!(decode_payload(token)["sub"], "admin");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let (name, value) = basic_header("admin", "wrong");

    let response = app.server.post("/login").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), BASIC_CHALLENGE);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new().await;
    let (name, value) = basic_header("root", "supersecret");

    let response = app.server.post("/login").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_header() {
    let app = TestApp::new().await;

    let response = app.server.post("/login").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), BASIC_CHALLENGE);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Missing or malformed Authorization header (expected: Basic <credentials>)"
    );
}

#[tokio::test]
async fn test_login_with_bearer_scheme_is_malformed() {
    let app = TestApp::new().await;
    let (name, value) = raw_auth_header("Bearer abc");

    let response = app.server.post("/login").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), BASIC_CHALLENGE);
}

#[tokio::test]
async fn test_login_embeds_profile_claims() {
    let app = TestApp::new().await;
    app.seed_user("admin", "Administrator", Some("admin")).await;

    let issued = login(&app.server).await;

    let payload = decode_payload(&issued.token);
    assert_eq!(payload["sub"], "admin");
    assert_eq!(payload["name"], "Administrator");
    assert_eq!(payload["role"], "admin");
}

#[tokio::test]
async fn test_login_then_access_users() {
    let app = TestApp::new().await;
    let issued = login(&app.server).await;

    let (name, value) = bearer_header(&issued.token);
    let response = app.server.get("/users").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.is_array());

    let response = app.server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Missing or malformed Authorization header"));

    let (name, value) = bearer_header("garbage");
    let response = app.server.get("/users").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_bearer_failures_have_no_challenge() {
    let app = TestApp::new().await;
    let (name, value) = bearer_header("garbage");

    let response = app.server.get("/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(WWW_AUTHENTICATE).is_none());
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = TestApp::new().await;
    let foreign = TokenService::new(b"some-other-secret", TokenLifetime::parse("1h").unwrap())
        .issue(&TokenClaims::new("admin"))
        .unwrap();

    let (name, value) = bearer_header(&foreign.token);
    let response = app.server.get("/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let expired = TokenService::new(TEST_SECRET.as_bytes(), TokenLifetime::parse("1h").unwrap())
        .issue_at(&TokenClaims::new("admin"), 1_000)
        .unwrap();

    let (name, value) = bearer_header(&expired.token);
    let response = app.server.get("/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_zero_lifetime_tokens_never_validate() {
    let mut config = crate::common::test_config();
    config.token_lifetime = TokenLifetime::parse("0").unwrap();
    let app = TestApp::with_config(config).await;

    let issued = login(&app.server).await;
    assert_eq!(issued.expires_in, "0");

    let (name, value) = bearer_header(&issued.token);
    let response = app.server.get("/users").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
