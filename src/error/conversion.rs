/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so handlers
 * can return `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * Error responses are plain text with a fixed message per variant:
 * duplicate email → 400, authentication failures → 401, missing task →
 * 404 with an empty body, store failures → 500 with a generic message.
 * Database errors are logged here with full detail; the client only ever
 * sees the generic text.
 */

use axum::response::{IntoResponse, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref err) = self {
            tracing::error!("Database error while handling request: {:?}", err);
        }

        let status = self.status_code();
        let body = self.body();

        if body.is_empty() {
            status.into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_response_has_empty_body() {
        let response = ApiError::TaskNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_response() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
