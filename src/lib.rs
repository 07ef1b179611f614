//! user-api - Main Library
//!
//! A small REST API over a relational `users` table. Clients log in with
//! HTTP Basic credentials at `POST /login` and receive a signed bearer token
//! (HS256 JWT); every data endpoint requires that token.
//!
//! # Module Structure
//!
//! - **`backend`** - Everything server-side
//!   - Axum router, application state, configuration
//!   - Credential challenge gate and token service
//!   - Authentication middleware
//!   - SQLite-backed user data access
//!   - Error types and their HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use user_api::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
