/**
 * Authentication Middleware
 *
 * Protects routes that require a bearer token. The token is taken from the
 * `Authorization` header, verified by the `TokenService`, and the decoded
 * identity is attached to the request extensions for handlers.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{parse_bearer_header, Claims, TokenService};
use crate::backend::error::{AuthError, AuthScheme};

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub subject: String,
    pub name: Option<String>,
    pub role: Option<String>,
    /// Unix timestamp the token expires at
    pub expires_at: u64,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            name: claims.name,
            role: claims.role,
            expires_at: claims.exp,
        }
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// Returns 401 Unauthorized if the header is missing/malformed or the token
/// is invalid or expired.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = parse_bearer_header(header).inspect_err(|_| {
        tracing::warn!(path = %request.uri().path(), "Missing or malformed Authorization header");
    })?;

    let claims = tokens.verify(token).inspect_err(|_| {
        tracing::warn!(path = %request.uri().path(), "Invalid or expired token");
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only works on routes behind `auth_middleware`; anywhere else it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MalformedAuthHeader(AuthScheme::Bearer)
            })?;

        Ok(AuthUser(user))
    }
}
