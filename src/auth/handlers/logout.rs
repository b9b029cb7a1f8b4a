/**
 * Logout Handler
 *
 * This module implements the handler for POST /auth/logout. Logout
 * always succeeds: the session is invalidated whether or not it held a
 * user.
 */

use axum::{extract::State, http::HeaderMap, http::StatusCode};

use crate::auth::sessions::SessionStore;

/// Logout handler. Clears the session and returns 200 unconditionally.
pub async fn logout(State(sessions): State<SessionStore>, headers: HeaderMap) -> StatusCode {
    sessions.log_out(&headers);
    StatusCode::OK
}
