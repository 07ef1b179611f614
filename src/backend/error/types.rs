/**
 * Backend Error Types
 *
 * This module defines the error types used by the backend.
 *
 * # Error Types
 *
 * - `AuthError` - Credential gate and token service failures
 * - `BackendError` - Everything a handler can return
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * Every authentication failure is final for the request and maps to
 * `401 Unauthorized`:
 * - Missing or malformed `Authorization` header
 * - Unknown user or wrong password on login
 * - Bad signature, malformed token, or expired token
 *
 * ## Data Errors
 *
 * - Unknown user id (`404`)
 * - Database failures (`500`, details only in logs)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Authorization scheme an endpoint expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Basic <base64(username:password)>`, used by `POST /login`
    Basic,
    /// `Bearer <token>`, used by every protected endpoint
    Bearer,
}

impl AuthScheme {
    /// The header prefix, without the trailing space
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Bearer => "Bearer",
        }
    }

    /// Human-readable shape of a valid header value
    pub fn expected(self) -> &'static str {
        match self {
            Self::Basic => "Basic <credentials>",
            Self::Bearer => "Bearer <token>",
        }
    }
}

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Header absent, wrong scheme, or no credentials/token after the scheme
    #[error("Missing or malformed Authorization header (expected: {})", .0.expected())]
    MalformedAuthHeader(AuthScheme),

    /// Username unknown or password mismatch
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bad signature, malformed token, or expired token
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Attempt to issue a token without a subject
    #[error("Token subject must not be empty")]
    EmptySubject,

    /// The signing library failed to encode a token
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// The `WWW-Authenticate` challenge to send with this error, if any
    ///
    /// Only failures of the Basic login gate challenge the client; bearer
    /// failures are plain JSON 401s.
    pub fn challenge(&self) -> Option<&'static str> {
        match self {
            Self::MalformedAuthHeader(AuthScheme::Basic) | Self::InvalidCredentials => {
                Some(BASIC_CHALLENGE)
            }
            _ => None,
        }
    }
}

/// Value of the `WWW-Authenticate` header sent by the login gate
pub const BASIC_CHALLENGE: &str = "Basic realm=\"user-api\"";

/// Backend-specific error types
///
/// Each variant can be converted into an HTTP response; see
/// `error::conversion`.
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use user_api::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "No fields to update");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No user row with this primary key
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401, except issuing failures (`EmptySubject`,
    ///   `TokenEncoding`), which are server faults (500)
    /// - `UserNotFound` - 404
    /// - `Database` / `SerializationError` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(AuthError::TokenEncoding(_) | AuthError::EmptySubject) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures get a generic message; the detail is logged where
    /// the error is converted.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(AuthError::TokenEncoding(_) | AuthError::EmptySubject) => {
                "Internal server error".to_string()
            }
            Self::Auth(err) => err.to_string(),
            Self::UserNotFound(_) => "User not found".to_string(),
            Self::Database(_) | Self::SerializationError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
