/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid or expired token",
 *   "status": 401
 * }
 * ```
 *
 * Failures of the Basic login gate additionally carry a
 * `WWW-Authenticate: Basic realm="user-api"` header.
 */

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::{AuthError, BackendError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        let mut response = (status, Json(body)).into_response();

        if let Self::Auth(err) = &self {
            if let Some(challenge) = err.challenge() {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
            }
        }

        response
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        BackendError::from(self).into_response()
    }
}

/// Shorthand for a 400 with a message
pub fn bad_request(message: impl Into<String>) -> BackendError {
    BackendError::handler(StatusCode::BAD_REQUEST, message)
}
