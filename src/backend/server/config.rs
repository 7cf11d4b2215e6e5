/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment and opens
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Values come from environment variables, after a `.env` file in the working
 * directory (if any) has been loaded with `dotenv`. Everything except
 * `JWT_SECRET` has a default suitable for local development.
 *
 * | Variable         | Default                          |
 * |------------------|----------------------------------|
 * | `JWT_SECRET`     | required                         |
 * | `DATABASE_URL`   | `sqlite://expenses.db?mode=rwc`  |
 * | `SERVER_PORT`    | `5000`                           |
 * | `TOKEN_TTL_SECS` | `3600`                           |
 * | `BCRYPT_COST`    | `bcrypt::DEFAULT_COST`           |
 * | `CORS_ORIGIN`    | unset (any origin)               |
 *
 * # Error Handling
 *
 * A missing signing secret or an unparsable number is a `ConfigError`; the
 * server binary refuses to start on either.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::shared::ConfigError;

/// Default SQLite database, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://expenses.db?mode=rwc";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default token lifetime (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Lifetime of issued tokens, in seconds
    pub token_ttl_secs: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Allowed CORS origin; any origin when `None`
    pub cors_origin: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("port", &self.port)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl ServerConfig {
    /// Configuration with defaults for everything but the secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_origin: None,
        }
    }

    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let mut config = Self::new(jwt_secret);

        if let Some(url) = get("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(port) = get("SERVER_PORT") {
            config.port = parse_value("SERVER_PORT", port)?;
        }
        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            config.token_ttl_secs = parse_value("TOKEN_TTL_SECS", ttl)?;
            if config.token_ttl_secs <= 0 {
                return Err(ConfigError::InvalidValue {
                    key: "TOKEN_TTL_SECS",
                    value: config.token_ttl_secs.to_string(),
                });
            }
        }
        if let Some(cost) = get("BCRYPT_COST") {
            config.bcrypt_cost = parse_value("BCRYPT_COST", cost)?;
            if !(4..=31).contains(&config.bcrypt_cost) {
                return Err(ConfigError::InvalidValue {
                    key: "BCRYPT_COST",
                    value: config.bcrypt_cost.to_string(),
                });
            }
        }
        config.cors_origin = get("CORS_ORIGIN");

        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

/// Open the connection pool and run migrations
///
/// In-memory databases live only as long as their connection, so for those
/// the pool is pinned to a single connection that is never recycled.
///
/// # Arguments
///
/// * `database_url` - sqlx SQLite URL, e.g. `sqlite://expenses.db?mode=rwc` or `sqlite::memory:`
///
/// # Returns
///
/// A migrated `SqlitePool`
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {:?}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database ready");

    Ok(pool)
}
