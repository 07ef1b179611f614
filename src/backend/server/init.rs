/**
 * Server Initialization
 *
 * This module builds the Axum application from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and apply migrations
 * 2. Build the token service and credential set from the config
 * 3. Create and configure the router
 *
 * A database that cannot be reached or migrated aborts initialization.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AppConfig, DEFAULT_JWT_SECRET};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// `BackendError::Database` if the pool cannot be opened or migrations fail.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing user-api backend server");

    if config.jwt_secret == DEFAULT_JWT_SECRET {
        tracing::warn!("JWT_SECRET is not set; using the insecure development default");
    }

    let db_pool = load_database(&config.database_url).await.inspect_err(|e| {
        tracing::error!("Failed to open database: {}", e);
    })?;

    let app_state = AppState::new(&config, db_pool);
    tracing::info!(
        token_lifetime = %config.token_lifetime.label(),
        "Authentication configured"
    );

    Ok(create_router(app_state))
}
