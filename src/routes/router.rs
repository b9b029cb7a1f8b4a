/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the auth and task route configurations into a single Axum router, with
 * the CORS policy the frontend dev server depends on and a plain 404
 * fallback.
 */

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::auth_routes::configure_auth_routes;
use crate::routes::task_routes::configure_task_routes;
use crate::server::state::AppState;

/// Origin of the development frontend.
const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (database pool and session store)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_task_routes(router);

    // Session cookies cross the dev-server origin boundary, so the CORS
    // policy must name the origin and allow credentials.
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(FRONTEND_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    router
        .layer(cors)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
