//! Authentication Module
//!
//! This module handles the two halves of authentication: the Basic
//! credential gate in front of `POST /login`, and the bearer tokens it hands
//! out.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Basic header parsing and the configured credential set
//! ├── sessions.rs     - JWT issue and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     └── login.rs    - Token issuing handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: Client sends `Authorization: Basic ...` to `POST /login` →
//!    credentials checked → token returned
//! 2. **Access**: Client sends `Authorization: Bearer <token>` → token
//!    verified by `middleware::auth` → handler runs
//!
//! # Security
//!
//! - Tokens are HS256 JWTs signed with `JWT_SECRET`, stateless, no revocation
//! - Expiry is checked without leeway
//! - Passwords are compared in plain text (see `credentials`)
//! - Every failure is a 401; nothing distinguishes an unknown user from a
//!   wrong password

/// Basic credential gate
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{parse_basic_header, BasicCredentials, CredentialSet};
pub use handlers::login;
pub use sessions::{parse_bearer_header, Claims, IssuedToken, TokenClaims, TokenService};
