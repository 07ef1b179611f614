/**
 * Credential Challenge Gate
 *
 * Validates `Authorization: Basic <base64(username:password)>` against the
 * credential set configured at startup.
 *
 * # Security
 *
 * Passwords are compared in plain text. This reproduces the demo behaviour
 * of the login endpoint and is a known limitation: a production deployment
 * must replace `CredentialSet::verify` with a salted-hash comparison.
 */

use std::collections::HashMap;
use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::backend::error::{AuthError, AuthScheme};
use crate::backend::server::config::AppConfig;

/// Username/password pair decoded from a Basic header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parse a raw `Authorization` header value as Basic credentials
///
/// The scheme is matched case-insensitively and the decoded payload is split
/// on the first `:`, so passwords may themselves contain colons.
pub fn parse_basic_header(header: Option<&str>) -> Result<BasicCredentials, AuthError> {
    let malformed = || AuthError::MalformedAuthHeader(AuthScheme::Basic);

    let header = header.ok_or_else(malformed)?;
    let (scheme, encoded) = header.trim().split_once(' ').ok_or_else(malformed)?;
    if !scheme.eq_ignore_ascii_case(AuthScheme::Basic.name()) {
        return Err(malformed());
    }

    let decoded = STANDARD.decode(encoded.trim()).map_err(|_| malformed())?;
    let decoded = String::from_utf8(decoded).map_err(|_| malformed())?;
    let (username, password) = decoded.split_once(':').ok_or_else(malformed)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Static username -> password table
///
/// Built once from configuration and never mutated afterwards.
#[derive(Clone, Default)]
pub struct CredentialSet {
    users: HashMap<String, String>,
}

impl CredentialSet {
    /// A credential set holding exactly one user
    pub fn single(username: impl Into<String>, password: impl Into<String>) -> Self {
        let mut users = HashMap::new();
        users.insert(username.into(), password.into());
        Self { users }
    }

    /// The configured Basic-Auth user
    pub fn from_config(config: &AppConfig) -> Self {
        Self::single(config.basic_auth_user.clone(), config.basic_auth_pass.clone())
    }

    /// Check a username/password pair
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.users.get(username) {
            Some(expected) if expected == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Run the whole gate on a raw header value
    ///
    /// Returns the authenticated username.
    pub fn authenticate(&self, header: Option<&str>) -> Result<String, AuthError> {
        let credentials = parse_basic_header(header)?;
        self.verify(&credentials.username, &credentials.password)?;
        Ok(credentials.username)
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("users", &self.users.keys().collect::<Vec<_>>())
            .finish()
    }
}
