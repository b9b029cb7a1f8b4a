//! Database test fixtures
//!
//! Provides an in-memory SQLite database with migrations applied, so the
//! suite runs without external infrastructure.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test database fixture
///
/// Owns a migrated in-memory database. A single never-recycled
/// connection keeps the in-memory store alive for the fixture's
/// lifetime.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
