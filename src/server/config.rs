/**
 * Server Configuration
 *
 * This module handles loading the database configuration and preparing
 * the connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables, with a local SQLite
 * file as the default so the server runs out of the box.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default database location when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite://taskboard.db";

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment (defaulting to a local
///    SQLite file, created if missing)
/// 2. Creates the connection pool
/// 3. Runs database migrations
///
/// # Errors
///
/// Returns the underlying `sqlx` error when the database cannot be
/// opened or migrated; the server cannot run without its store.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
        DEFAULT_DATABASE_URL.to_string()
    });

    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
