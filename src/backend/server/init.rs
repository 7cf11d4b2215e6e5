/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` from the pool and configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated; unlike optional
/// services, the store is required for every route.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing expense tracker backend");

    let db_pool = load_database(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to open database {}: {:?}", config.database_url, e);
        BackendError::from(e)
    })?;

    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state, config.cors_origin.as_deref());

    tracing::info!("Router configured");

    Ok(app)
}
