//! Users Module
//!
//! Persistence and HTTP handlers for the `users` table.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - User model and sqlx queries
//! └── handlers.rs  - GET/PUT /users handlers
//! ```

/// User model and database operations
pub mod db;

/// HTTP handlers for `/users`
pub mod handlers;

pub use db::{NewUser, User, UserChanges};
pub use handlers::{get_user_handler, list_users_handler, update_user_handler};
