//! Shared fixtures for the integration test suite.

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;
use sqlx::SqlitePool;

/// Start a test server over the given (already migrated) pool.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = taskboard::create_app(pool);
    TestServer::new(app).expect("failed to start test server")
}
