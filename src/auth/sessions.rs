/**
 * Session Management
 *
 * This module implements the server-side session store keyed by a
 * cookie. Each session holds at most one current-user slot which is set
 * on login, read by session-scoped endpoints, and cleared on logout.
 *
 * # Design
 *
 * The store is an explicit value held in `AppState` and threaded into
 * every handler that needs it, so the auth dependency is visible in each
 * operation's signature instead of living in ambient per-request state.
 *
 * Session ids are random v4 UUIDs carried in an `sid` cookie. Logging in
 * while a live session cookie is present silently overwrites that
 * session's user; logging out is idempotent.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// The user slot stored in a session.
///
/// Carries exactly the public projection returned by login and
/// `GET /auth/user`, plus the id used to scope task ownership.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// In-process session store: session id → current user.
///
/// Cheap to clone; all clones share the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, SessionUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current user for the session referenced by the request's cookie,
    /// or `None` when there is no cookie or no live session behind it.
    pub fn current_user(&self, headers: &HeaderMap) -> Option<SessionUser> {
        let id = session_id(headers)?;
        self.sessions.lock().unwrap().get(&id).cloned()
    }

    /// Set the session's current user, returning the session id.
    ///
    /// Reuses the request's session id when it refers to a live session
    /// (overwriting its user slot); otherwise a fresh session is created.
    pub fn log_in(&self, headers: &HeaderMap, user: SessionUser) -> Uuid {
        let mut sessions = self.sessions.lock().unwrap();
        let id = match session_id(headers) {
            Some(id) if sessions.contains_key(&id) => id,
            _ => Uuid::new_v4(),
        };
        sessions.insert(id, user);
        id
    }

    /// Invalidate the session referenced by the request, if any.
    pub fn log_out(&self, headers: &HeaderMap) {
        if let Some(id) = session_id(headers) {
            self.sessions.lock().unwrap().remove(&id);
        }
    }
}

/// Extract the session id from the request's `Cookie` headers.
fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

/// `Set-Cookie` value for a session id.
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, email: &str) -> SessionUser {
        SessionUser {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
        }
    }

    fn headers_with_cookie(id: Uuid) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("theme=dark; {SESSION_COOKIE}={id}").parse().unwrap(),
        );
        headers
    }

    #[test]
    fn test_login_then_lookup() {
        let store = SessionStore::new();
        let id = store.log_in(&HeaderMap::new(), user(1, "a@x.com"));

        let found = store.current_user(&headers_with_cookie(id)).unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(found.email, "a@x.com");
    }

    #[test]
    fn test_no_cookie_means_no_user() {
        let store = SessionStore::new();
        store.log_in(&HeaderMap::new(), user(1, "a@x.com"));

        assert!(store.current_user(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_relogin_overwrites_session_user() {
        let store = SessionStore::new();
        let id = store.log_in(&HeaderMap::new(), user(1, "a@x.com"));

        let headers = headers_with_cookie(id);
        let same_id = store.log_in(&headers, user(2, "b@x.com"));

        assert_eq!(same_id, id);
        assert_eq!(store.current_user(&headers).unwrap().id, 2);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = SessionStore::new();
        let id = store.log_in(&HeaderMap::new(), user(1, "a@x.com"));
        let headers = headers_with_cookie(id);

        store.log_out(&headers);
        assert!(store.current_user(&headers).is_none());

        // No session behind the cookie anymore; still fine.
        store.log_out(&headers);
        store.log_out(&HeaderMap::new());
    }

    #[test]
    fn test_stale_cookie_gets_fresh_session() {
        let store = SessionStore::new();
        let stale = headers_with_cookie(Uuid::new_v4());

        let id = store.log_in(&stale, user(1, "a@x.com"));
        assert!(store.current_user(&headers_with_cookie(id)).is_some());
    }

    #[test]
    fn test_session_cookie_format() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id);
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}={id}")));
        assert!(cookie.contains("HttpOnly"));
    }
}
