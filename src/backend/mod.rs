//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server with a
//! Basic-Auth login endpoint, JWT bearer authorization and a SQLite-backed
//! user table.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential gate, token service, login handler
//! - **`middleware`** - Basic challenge and bearer verification layers
//! - **`users`** - User data access and `/users` handlers
//! - **`data`** - Sample data endpoints
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization, state and config
//! ├── routes/         - Route configuration
//! ├── auth/           - Credentials, tokens, login
//! ├── middleware/     - Request middleware
//! ├── users/          - User persistence and handlers
//! ├── data/           - Sample data handlers
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! POST /login   -> basic_auth_middleware -> login          -> TokenService::issue
//! GET  /users   -> auth_middleware       -> list_users_handler -> users::db
//! ```
//!
//! # State Management
//!
//! `AppState` holds the immutable credential set and token service behind
//! `Arc`, plus the sqlx pool. Nothing in it is mutated after startup, so no
//! locking is involved on the request path.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: credentials, tokens and login
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User persistence and handlers
pub mod users;

/// Sample data endpoints
pub mod data;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
