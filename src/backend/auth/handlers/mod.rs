//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`login`** - POST /login - Exchange Basic credentials for a bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use user_api::backend::auth::handlers::login;
//! use user_api::backend::server::AppState;
//!
//! # fn example() {
//! let router: Router<AppState> = Router::new().route("/login", post(login));
//! # }
//! ```

/// Login handler
pub mod login;

pub use login::login;
