/**
 * Basic Challenge Middleware
 *
 * Guards `POST /login`. The `Authorization: Basic` header is checked against
 * the configured `CredentialSet`; on success the authenticated username is
 * attached to the request as a `BasicPrincipal`.
 *
 * Failures answer `401` with `WWW-Authenticate: Basic realm="user-api"` so
 * browsers and HTTP clients know to prompt for credentials.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::credentials::CredentialSet;
use crate::backend::error::AuthError;

/// Username that passed the Basic challenge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicPrincipal {
    pub username: String,
}

/// Basic challenge middleware
///
/// This middleware:
/// 1. Extracts the Basic credentials from the Authorization header
/// 2. Checks them against the configured `CredentialSet`
/// 3. Attaches `BasicPrincipal` to request extensions
///
/// Returns 401 Unauthorized with a `WWW-Authenticate: Basic` challenge if
/// the header is missing/malformed or the credentials do not match.
pub async fn basic_auth_middleware(
    State(credentials): State<Arc<CredentialSet>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let username = credentials.authenticate(header).inspect_err(|err| {
        // Never log the header itself; it carries the password.
        tracing::warn!("Login rejected: {}", err);
    })?;

    request
        .extensions_mut()
        .insert(BasicPrincipal { username });

    Ok(next.run(request).await)
}
