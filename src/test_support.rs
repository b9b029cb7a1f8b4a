//! Shared fixtures for unit tests.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Open a migrated in-memory database.
///
/// A single never-recycled connection keeps the in-memory database alive
/// for the lifetime of the pool.
pub(crate) async fn test_pool() -> SqlitePool {
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

    pool
}
