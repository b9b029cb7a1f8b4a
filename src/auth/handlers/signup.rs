/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Check that no user with the candidate's email exists
 * 2. Derive the username from the name fields
 * 3. Persist the candidate; the store assigns the id
 *
 * # Responses
 *
 * - `200 OK` with plain text "User registered successfully"
 * - `400 Bad Request` with plain text "Email already exists" for every
 *   registration failure, including store-level uniqueness violations
 *
 * There is no email-format or password-strength validation; the service
 * only reports whether registration happened.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::service;
use crate::auth::users::NewUser;
use crate::error::ApiError;

/// Sign up handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(candidate)` - Signup body carrying the user fields
///
/// # Returns
///
/// Plain-text confirmation, or `ApiError::EmailTaken` when the candidate
/// was not registered.
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "secret",
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "dateOfBirth": "1815-12-10"
/// }
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(candidate): Json<NewUser>,
) -> Result<&'static str, ApiError> {
    tracing::info!("Signup request for email: {}", candidate.email);

    if service::register_user(&pool, &candidate).await? {
        Ok("User registered successfully")
    } else {
        Err(ApiError::EmailTaken)
    }
}
