/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - Session token keys
 * - The bcrypt work factor
 *
 * Nothing in it changes after startup, so it is cloned freely into handlers.
 *
 * # Example
 *
 * ```rust,ignore
 * use expense_tracker::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let pool = &state.db_pool;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool
/// * `tokens` - Keys for issuing and verifying session tokens
/// * `bcrypt_cost` - Work factor for new password hashes
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Session token keys
    pub tokens: Arc<TokenKeys>,

    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build state from an open pool and the server configuration
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs)),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// Fresh in-memory database with a cheap bcrypt cost
    pub(crate) async fn for_tests() -> Self {
        let pool = crate::backend::server::config::load_database("sqlite::memory:")
            .await
            .expect("in-memory database");
        let mut config = ServerConfig::new("test-secret");
        config.bcrypt_cost = 4;
        Self::new(pool, &config)
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract the pool directly using
/// `State(SqlitePool)`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for TokenKeys
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
