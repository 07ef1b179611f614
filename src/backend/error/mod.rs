//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in handlers and middleware and convert directly
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementations
//! ```
//!
//! # Error Types
//!
//! - `AuthError` - Login gate and token failures (always 401 to the client)
//! - `BackendError` - Any handler failure, wrapping `AuthError`, sqlx and
//!   serde errors
//!
//! # Example
//!
//! ```rust,no_run
//! use user_api::backend::error::BackendError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! // Handler can return BackendError directly
//! # Ok(Response::new("OK".into()))
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::bad_request;
pub use types::{AuthError, AuthScheme, BackendError, BASIC_CHALLENGE};
