/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /login` - Basic credentials in, bearer token out
 *
 * ## Data (bearer token required)
 * - `GET /api/data` - Sample payload
 * - `POST /api/data` - Echo a JSON payload
 * - `GET /users` - List users
 * - `GET /users/{id}` - Get one user
 * - `PUT /users/{id}` - Partially update a user
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::login;
use crate::backend::data::{get_data, post_data};
use crate::backend::middleware::{auth_middleware, basic_auth_middleware};
use crate::backend::server::state::AppState;
use crate::backend::users::{get_user_handler, list_users_handler, update_user_handler};

/// Configure the login route
///
/// The Basic challenge is a route layer, so it only runs for requests that
/// actually match `POST /login`.
pub fn configure_auth_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let auth_routes = Router::new()
        .route("/login", post(login))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            basic_auth_middleware,
        ));

    router.merge(auth_routes)
}

/// Configure the bearer-protected routes
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/data", get(get_data).post(post_data))
        .route("/users", get(list_users_handler))
        .route(
            "/users/{id}",
            get(get_user_handler).put(update_user_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(protected)
}
