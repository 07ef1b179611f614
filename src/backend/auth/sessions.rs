/**
 * Token Service
 *
 * Issues and verifies the HS256 bearer tokens handed out by `POST /login`.
 *
 * Tokens are stateless: nothing is recorded server-side, there is no
 * revocation, and a token dies only by expiring (or by the server secret
 * being rotated).
 *
 * # Verification
 *
 * 1. Header check (`Bearer <token>`) - see `parse_bearer_header`
 * 2. Signature and structure, HS256 only
 * 3. Expiry, with no leeway: a token whose `exp` is at or before the
 *    current second is rejected
 *
 * Steps 2 and 3 both fail with `AuthError::InvalidOrExpiredToken`.
 */

use std::fmt;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::{AuthError, AuthScheme};
use crate::backend::server::config::{AppConfig, TokenLifetime};

/// Token type label returned to clients
pub const TOKEN_TYPE: &str = "Bearer";

/// Identity a token is issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Authenticated identity, never empty (whitespace is kept as-is)
    pub subject: String,
    /// Display name
    pub name: Option<String>,
    /// Role
    pub role: Option<String>,
}

impl TokenClaims {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            name: None,
            role: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }
}

/// JWT claims structure (wire form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (authenticated username)
    pub sub: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// The identity part of the claims, without timestamps
    pub fn token_claims(&self) -> TokenClaims {
        TokenClaims {
            subject: self.sub.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// A freshly issued token plus the metadata handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    /// Always `"Bearer"`
    pub token_type: String,
    /// Configured lifetime label, e.g. `"1h"`
    pub expires_in: String,
}

/// Extract the token from a raw `Authorization` header value
///
/// Runs before any decoding: an absent header, a scheme other than
/// `Bearer` (case-insensitive) or an empty token is a malformed header.
pub fn parse_bearer_header(header: Option<&str>) -> Result<&str, AuthError> {
    let malformed = || AuthError::MalformedAuthHeader(AuthScheme::Bearer);

    let header = header.ok_or_else(malformed)?;
    let (scheme, token) = header.trim().split_once(' ').ok_or_else(malformed)?;
    if !scheme.eq_ignore_ascii_case(AuthScheme::Bearer.name()) {
        return Err(malformed());
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(malformed());
    }
    Ok(token)
}

/// Signs and verifies bearer tokens with a single server secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: TokenLifetime,
}

impl TokenService {
    pub fn new(secret: &[u8], lifetime: TokenLifetime) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` against an explicit clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            lifetime,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.token_lifetime.clone())
    }

    pub fn lifetime(&self) -> &TokenLifetime {
        &self.lifetime
    }

    /// Issue a token for `claims`, valid from now for the configured lifetime
    pub fn issue(&self, claims: &TokenClaims) -> Result<IssuedToken, AuthError> {
        self.issue_at(claims, now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, claims: &TokenClaims, issued_at: u64) -> Result<IssuedToken, AuthError> {
        if claims.subject.is_empty() {
            return Err(AuthError::EmptySubject);
        }

        let wire = Claims {
            sub: claims.subject.clone(),
            name: claims.name.clone(),
            role: claims.role.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.lifetime.as_secs()),
        };

        let token = encode(&Header::new(Algorithm::HS256), &wire, &self.encoding_key)
            .map_err(AuthError::TokenEncoding)?;

        Ok(IssuedToken {
            token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.lifetime.label().to_string(),
        })
    }

    /// Verify and decode a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, now())
    }

    /// Verify and decode a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: u64) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AuthError::InvalidOrExpiredToken
            })?
            .claims;

        if claims.exp <= now {
            tracing::debug!("Token for {} expired at {}", claims.sub, claims.exp);
            return Err(AuthError::InvalidOrExpiredToken);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

fn now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
