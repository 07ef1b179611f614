/**
 * Server Configuration
 *
 * This module loads the immutable `AppConfig` the server is built from and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read once, at startup, from environment variables (the
 * binary loads `.env` first). Every value has a development default; the
 * signing secret and the login credentials defaults are placeholders and a
 * warning is logged when the secret falls back to its default.
 *
 * | Variable          | Default                       |
 * |-------------------|-------------------------------|
 * | `PORT`            | `3000`                        |
 * | `DATABASE_URL`    | `sqlite://users.db?mode=rwc`  |
 * | `JWT_SECRET`      | `change-me-in-production`     |
 * | `JWT_EXPIRES_IN`  | `1h`                          |
 * | `BASIC_AUTH_USER` | `admin`                       |
 * | `BASIC_AUTH_PASS` | `supersecret`                 |
 */

use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";
pub const DEFAULT_TOKEN_LIFETIME: &str = "1h";
pub const DEFAULT_BASIC_AUTH_USER: &str = "admin";
pub const DEFAULT_BASIC_AUTH_PASS: &str = "supersecret";

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// `JWT_EXPIRES_IN` is not `<n>`, `<n>s`, `<n>m`, `<n>h`, `<n>d` or
    /// `<n>w` with `<n>` a whole number. Fractions, years and
    /// space-separated forms such as `2 days` are rejected.
    #[error("invalid token lifetime: {0:?} (expected e.g. 3600, 90s, 30m, 1h, 7d, 2w)")]
    InvalidLifetime(String),
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Token lifetime as configured
///
/// Keeps the original label (`"1h"`) next to the parsed duration: the label
/// is echoed back to clients as `expires_in`, the duration is what gets
/// embedded in the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLifetime {
    label: String,
    duration: Duration,
}

impl TokenLifetime {
    /// Parse `<n>`, `<n>s`, `<n>m`, `<n>h`, `<n>d` or `<n>w`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        let invalid = || ConfigError::InvalidLifetime(value.to_string());

        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (amount, unit) = trimmed.split_at(split);
        let amount: u64 = amount.parse().map_err(|_| invalid())?;

        let multiplier = match unit {
            "" | "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            "w" => 7 * 24 * 60 * 60,
            _ => return Err(invalid()),
        };
        let seconds = amount.checked_mul(multiplier).ok_or_else(invalid)?;

        Ok(Self {
            label: trimmed.to_string(),
            duration: Duration::from_secs(seconds),
        })
    }

    /// Lifetime in whole seconds
    pub fn as_secs(&self) -> u64 {
        self.duration.as_secs()
    }

    /// The label as written in configuration
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Application configuration
///
/// Built once at startup and handed by value to the components that need
/// it. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port
    pub port: u16,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Token lifetime
    pub token_lifetime: TokenLifetime,
    /// The single Basic-Auth username
    pub basic_auth_user: String,
    /// The single Basic-Auth password (plain text)
    pub basic_auth_pass: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_lifetime: TokenLifetime {
                label: DEFAULT_TOKEN_LIFETIME.to_string(),
                duration: Duration::from_secs(60 * 60),
            },
            basic_auth_user: DEFAULT_BASIC_AUTH_USER.to_string(),
            basic_auth_pass: DEFAULT_BASIC_AUTH_PASS.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(lifetime) = lookup("JWT_EXPIRES_IN") {
            builder = builder.token_lifetime(TokenLifetime::parse(&lifetime)?);
        }
        if let Some(user) = lookup("BASIC_AUTH_USER") {
            builder = builder.basic_auth_user(user);
        }
        if let Some(pass) = lookup("BASIC_AUTH_PASS") {
            builder = builder.basic_auth_pass(pass);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.basic_auth_user.trim().is_empty() {
            return Err(ConfigError::MissingValue("BASIC_AUTH_USER"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_lifetime: Option<TokenLifetime>,
    basic_auth_user: Option<String>,
    basic_auth_pass: Option<String>,
}

impl AppConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_lifetime(mut self, lifetime: TokenLifetime) -> Self {
        self.token_lifetime = Some(lifetime);
        self
    }

    /// Set the Basic-Auth username
    pub fn basic_auth_user(mut self, user: impl Into<String>) -> Self {
        self.basic_auth_user = Some(user.into());
        self
    }

    /// Set the Basic-Auth password
    pub fn basic_auth_pass(mut self, pass: impl Into<String>) -> Self {
        self.basic_auth_pass = Some(pass.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            token_lifetime: self.token_lifetime.unwrap_or(defaults.token_lifetime),
            basic_auth_user: self.basic_auth_user.unwrap_or(defaults.basic_auth_user),
            basic_auth_pass: self.basic_auth_pass.unwrap_or(defaults.basic_auth_pass),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Open the SQLite connection pool and run migrations
///
/// In-memory databases are private to a single connection, so the pool is
/// capped at one connection for `:memory:` URLs.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let in_memory = database_url.contains(":memory:");
    let mut options = SqlitePoolOptions::new().max_connections(if in_memory { 1 } else { 5 });
    if in_memory {
        // Dropping the only connection drops the database.
        options = options.idle_timeout(None).max_lifetime(None);
    }
    let pool = options.connect(database_url).await?;

    tracing::info!("Database connected");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the migrations in `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
