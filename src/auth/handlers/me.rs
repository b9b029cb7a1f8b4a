/**
 * Current User Handler
 *
 * This module implements the handler for GET /auth/user, which returns
 * the public projection of the session's current user.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::sessions::SessionStore;
use crate::error::ApiError;

/// Current user handler
///
/// Returns the same four-field projection as login, or
/// `401 Unauthorized` with "Not logged in" when the session holds no
/// user.
pub async fn current_user(
    State(sessions): State<SessionStore>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let user = sessions.current_user(&headers).ok_or(ApiError::NotLoggedIn)?;
    Ok(Json(user.into()))
}
