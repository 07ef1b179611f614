/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public routes (`GET /`)
 * 2. Login route (Basic challenge)
 * 3. API routes (bearer token)
 * 4. Fallback handler (JSON 404)
 *
 * Tracing and CORS wrap everything, including the fallback.
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

/// Text served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to the React API Server!";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome));

    let router = configure_auth_routes(router, &app_state);
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not found")
}
