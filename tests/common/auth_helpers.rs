//! Authentication helpers for integration tests.

use axum::http::{header, StatusCode};
use axum_test::{TestResponse, TestServer};

/// Register a user through the public signup endpoint.
pub async fn signup(server: &TestServer, email: &str, password: &str, first: &str, last: &str) {
    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
            "firstName": first,
            "lastName": last,
            "dateOfBirth": "1990-01-01"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/// Log in and return the `sid=<id>` cookie pair for follow-up requests.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({
            "email": email,
            "password": password
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    session_cookie(&response)
}

/// Extract the session cookie pair from a login response.
pub fn session_cookie(response: &TestResponse) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should carry a session cookie")
        .to_str()
        .expect("cookie should be valid UTF-8")
        .split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .to_string()
}
