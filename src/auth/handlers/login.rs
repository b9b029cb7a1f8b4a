/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Compare the supplied password with the stored one as exact strings;
 *    both sides must be present and identical
 * 3. Set the session's current user and return the public projection
 *
 * # Security
 *
 * - Invalid credentials always return 401 with the same fixed message
 *   (no user-enumeration signal)
 * - The password is never included in the response
 * - Logging in over a live session silently overwrites its user
 */

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};

use crate::auth::handlers::types::{LoginRequest, UserResponse};
use crate::auth::service;
use crate::auth::sessions::{session_cookie, SessionUser};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database pool and session store)
/// * `headers` - Request headers, for an existing session cookie
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with `{id, firstName, lastName, email}` and a session cookie,
/// or `401 Unauthorized` with "Invalid credentials".
pub async fn login(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let found = match request.email.as_deref() {
        Some(email) => service::find_by_email(&state.db_pool, email).await?,
        None => None,
    };

    // Exact string equality; a missing password on either side never matches.
    let user = match (found, request.password.as_deref()) {
        (Some(user), Some(password)) if user.password == password => user,
        _ => {
            tracing::warn!("Login failed for email: {:?}", request.email);
            return Err(ApiError::InvalidCredentials);
        }
    };

    let session_user = SessionUser::from(user);
    let session_id = state.sessions.log_in(&headers, session_user.clone());

    tracing::info!("User logged in: {}", session_user.email);

    Ok((
        [(header::SET_COOKIE, session_cookie(session_id))],
        Json(UserResponse::from(session_user)),
    ))
}
