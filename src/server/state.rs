/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the database
 * connection pool and the session store. Both are cheap to clone and
 * thread-safe, so the state is cloned per request by Axum.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need (`State<SqlitePool>` or `State<SessionStore>`) instead of the
 * whole `AppState`, keeping each handler's dependencies visible in its
 * signature.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::SessionStore;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Cookie-keyed session store
    ///
    /// Holds at most one current-user slot per session; set on login,
    /// read by session-scoped endpoints, cleared on logout.
    pub sessions: SessionStore,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
