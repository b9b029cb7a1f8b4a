/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers.
 * Each variant maps to a fixed wire response, so handlers can propagate
 * errors with `?` and let the conversion layer produce the HTTP reply.
 *
 * # Error Categories
 *
 * - *duplicate resource* — the signup email is already registered
 * - *authentication failure* — bad credentials or missing session
 * - *not found* — an operation referenced a nonexistent task id
 * - *store failure* — an unexpected database error (never leaked to the
 *   client; logged server-side and surfaced as a generic 500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
///
/// The wire contract uses fixed human-readable strings, so the variants
/// carry no per-occurrence message except for database failures, whose
/// detail is logged but never serialized into a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signup with an email that is already registered.
    ///
    /// Also covers store-level uniqueness violations during registration;
    /// the registration surface reports every non-registration identically.
    #[error("Email already exists")]
    EmailTaken,

    /// Login with an unknown email, a wrong password, or a missing
    /// password on either side.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A session-scoped endpoint was called without a logged-in user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// An operation referenced a task id that does not exist.
    ///
    /// The wire response is an empty body; the message here is only for
    /// logs and `Display`.
    #[error("Task not found")]
    TaskNotFound,

    /// Unexpected store failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailTaken => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client.
    ///
    /// Not-found responses have an empty body and database failures map
    /// to a generic message without internal detail.
    pub fn body(&self) -> &'static str {
        match self {
            Self::EmailTaken => "Email already exists",
            Self::InvalidCredentials => "Invalid credentials",
            Self::NotLoggedIn => "Not logged in",
            Self::TaskNotFound => "",
            Self::Database(_) => "Internal server error",
        }
    }
}
