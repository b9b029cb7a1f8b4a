/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use serde::Deserialize;
use sqlx::SqlitePool;

/// User struct representing a user in the database
///
/// Deliberately not serializable: responses use the four-field public
/// projection, so the stored password can never leak onto the wire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user id (store-assigned, immutable)
    pub id: i64,
    /// Password, stored as plaintext (preserved frontend contract)
    pub password: String,
    /// Date of birth, free-form string
    pub date_of_birth: String,
    /// Email address (unique)
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Username, auto-derived at registration as "{first} {last}"
    pub username: Option<String>,
}

/// Signup candidate before the store has assigned an id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `candidate` - Signup candidate fields
/// * `username` - Derived username
///
/// # Returns
/// Created user (with store-assigned id) or error
pub async fn create_user(
    pool: &SqlitePool,
    candidate: &NewUser,
    username: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (password, date_of_birth, email, first_name, last_name, username)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, password, date_of_birth, email, first_name, last_name, username
        "#,
    )
    .bind(&candidate.password)
    .bind(&candidate.date_of_birth)
    .bind(&candidate.email)
    .bind(&candidate.first_name)
    .bind(&candidate.last_name)
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, password, date_of_birth, email, first_name, last_name, username
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
