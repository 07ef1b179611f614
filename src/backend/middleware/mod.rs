//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! - **`basic`** - Basic credential challenge in front of `POST /login`
//! - **`auth`** - Bearer token verification for every protected route
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware, routing::get, Router};
//! use user_api::backend::auth::sessions::TokenService;
//! use user_api::backend::middleware::auth_middleware;
//! use user_api::backend::server::config::TokenLifetime;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = Arc::new(TokenService::new(b"secret", TokenLifetime::parse("1h")?));
//! let protected: Router = Router::new()
//!     .route("/users", get(|| async { "[]" }))
//!     .route_layer(middleware::from_fn_with_state(tokens, auth_middleware));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod basic;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use basic::{basic_auth_middleware, BasicPrincipal};
