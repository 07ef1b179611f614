//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, fallback, global layers
//! └── api_routes.rs   - Login and bearer-protected routes
//! ```
//!
//! # Route Table
//!
//! | Method | Path          | Auth   |
//! |--------|---------------|--------|
//! | GET    | `/`           | none   |
//! | POST   | `/login`      | Basic  |
//! | GET    | `/api/data`   | Bearer |
//! | POST   | `/api/data`   | Bearer |
//! | GET    | `/users`      | Bearer |
//! | GET    | `/users/{id}` | Bearer |
//! | PUT    | `/users/{id}` | Bearer |

/// Main router creation
pub mod router;

/// Login and API route configuration
pub mod api_routes;

pub use router::create_router;
