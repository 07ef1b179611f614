//! Integration tests
//!
//! Drive the full router through `axum_test::TestServer`.

mod api;
