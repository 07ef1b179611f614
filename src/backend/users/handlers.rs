/**
 * User Handlers
 *
 * HTTP handlers for the `/users` resource. All of them sit behind
 * `auth_middleware`, so they only run for a verified bearer token.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::{bad_request, BackendError};
use crate::backend::middleware::AuthUser;
use crate::backend::users::db::{self, User, UserChanges};

/// GET /users
pub async fn list_users_handler(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<User>>, BackendError> {
    let users = db::list_users(&pool).await?;
    tracing::debug!(caller = %caller.subject, count = users.len(), "Listed users");
    Ok(Json(users))
}

/// GET /users/{id}
///
/// # Errors
///
/// * `404 Not Found` - If no user has this id
pub async fn get_user_handler(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<User>, BackendError> {
    let user = db::get_user_by_id(&pool, id)
        .await?
        .ok_or(BackendError::UserNotFound(id))?;
    tracing::debug!(caller = %caller.subject, user_id = id, "Fetched user");
    Ok(Json(user))
}

/// PUT /users/{id}
///
/// Partial update: any of `name`, `email`, `role` may be sent, the rest keep
/// their stored value.
///
/// # Errors
///
/// * `400 Bad Request` - If the body carries none of the updatable fields
/// * `404 Not Found` - If no user has this id
pub async fn update_user_handler(
    AuthUser(caller): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(changes): Json<UserChanges>,
) -> Result<Json<User>, BackendError> {
    if changes.is_empty() {
        return Err(bad_request("No fields to update"));
    }

    let user = db::update_user(&pool, id, &changes)
        .await?
        .ok_or(BackendError::UserNotFound(id))?;

    tracing::info!(caller = %caller.subject, user_id = id, "User updated");
    Ok(Json(user))
}
