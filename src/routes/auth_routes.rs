/**
 * Auth Route Configuration
 *
 * Routes for signup, login, logout, and current-user lookup.
 */

use axum::Router;

use crate::auth::{current_user, login, logout, signup};
use crate::server::state::AppState;

/// Configure authentication routes
///
/// - `POST /auth/signup` - User registration (public)
/// - `POST /auth/login` - User login, sets the session cookie (public)
/// - `GET /auth/user` - Current user info (session)
/// - `POST /auth/logout` - Clear the session (always succeeds)
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", axum::routing::post(signup))
        .route("/auth/login", axum::routing::post(login))
        .route("/auth/user", axum::routing::get(current_user))
        .route("/auth/logout", axum::routing::post(logout))
}
