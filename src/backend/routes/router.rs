/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response through `tracing`
 * - `CorsLayer` admits the configured client origin, or any origin when none
 *   is configured
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, token keys, bcrypt cost)
/// * `cors_origin` - Allowed browser origin; `None` allows any
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origin)),
        )
        .with_state(app_state)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => layer.allow_origin(AllowOrigin::exact(value)),
        Some(Err(e)) => {
            tracing::warn!("Ignoring unusable CORS_ORIGIN: {:?}", e);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
