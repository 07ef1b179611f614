/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool
 * - The token service (signing key and lifetime)
 * - The credential set checked by `POST /login`
 *
 * # Thread Safety
 *
 * Nothing here is mutated after startup. The services sit behind `Arc` so
 * cloning the state per request is cheap; `SqlitePool` is already a shared
 * handle.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // Only the pool is extracted, not the whole AppState
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::credentials::CredentialSet;
use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::AppConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub credentials: Arc<CredentialSet>,
}

impl AppState {
    /// Build the services described by `config` around an open pool
    pub fn new(config: &AppConfig, db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            token_service: Arc::new(TokenService::from_config(config)),
            credentials: Arc::new(CredentialSet::from_config(config)),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_service.clone()
    }
}

impl FromRef<AppState> for Arc<CredentialSet> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
