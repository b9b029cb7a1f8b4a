/**
 * Server Initialization
 *
 * This module assembles the Axum application: it creates the session
 * store, builds the shared application state around the database pool,
 * and configures the router.
 *
 * The pool is passed in rather than loaded here so tests can hand the
 * app an in-memory database.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionStore;
use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `db_pool` - Connection pool for the relational store (already
///   migrated; see `server::config::load_database`)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(db_pool: SqlitePool) -> Router<()> {
    tracing::info!("Initializing taskboard backend");

    // Sessions live in process memory; restarting the server logs
    // everyone out.
    let sessions = SessionStore::new();

    let app_state = AppState { db_pool, sessions };

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
