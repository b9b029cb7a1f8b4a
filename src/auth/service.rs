/**
 * Authentication Service
 *
 * Registration and credential checking on top of the user store.
 *
 * # Registration Process
 *
 * 1. Reject the candidate if a user with the same email already exists
 * 2. Derive the username from the name fields: "{first} {last}", trimmed
 * 3. Persist the candidate; the store assigns the id
 *
 * A store-level uniqueness violation during the insert (for example two
 * concurrent signups racing on the same email, or a username collision)
 * is reported the same way as a duplicate email: registration failed.
 *
 * # Security
 *
 * Passwords are compared as exact strings against the stored plaintext
 * value. This preserves the behavioral contract of the existing frontend;
 * it is a known security gap, flagged in DESIGN.md rather than silently
 * upgraded.
 */

use sqlx::SqlitePool;

use crate::auth::users::{self, NewUser, User};

/// Register a new user.
///
/// Returns `false` when a user with the candidate's email already exists
/// or when the store rejects the insert on a uniqueness constraint;
/// `true` once the candidate is persisted with its derived username.
pub async fn register_user(pool: &SqlitePool, candidate: &NewUser) -> Result<bool, sqlx::Error> {
    if users::get_user_by_email(pool, &candidate.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", candidate.email);
        return Ok(false);
    }

    // Auto-generate username with original casing and a space
    let username = format!("{} {}", candidate.first_name, candidate.last_name)
        .trim()
        .to_string();

    match users::create_user(pool, candidate, &username).await {
        Ok(user) => {
            tracing::info!("User registered: {} ({})", username, user.email);
            Ok(true)
        }
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            tracing::warn!("Registration rejected by store constraint: {:?}", err);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// Check credentials: true iff a user with that email exists and its
/// stored password equals the supplied password exactly.
pub async fn authenticate_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<bool, sqlx::Error> {
    let user = users::get_user_by_email(pool, email).await?;
    Ok(user.is_some_and(|user| user.password == password))
}

/// Look up a user by email. Direct passthrough to the store.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    users::get_user_by_email(pool, email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_pool;

    fn candidate(email: &str, first: &str, last: &str) -> NewUser {
        NewUser {
            password: "secret".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_derives_username() {
        let pool = test_pool().await;

        let registered = register_user(&pool, &candidate("ada@example.com", "Ada", "Lovelace"))
            .await
            .unwrap();
        assert!(registered);

        let user = find_by_email(&pool, "ada@example.com").await.unwrap().unwrap();
        assert_eq!(user.username.as_deref(), Some("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails() {
        let pool = test_pool().await;

        let first = register_user(&pool, &candidate("dup@example.com", "First", "User"))
            .await
            .unwrap();
        let second = register_user(&pool, &candidate("dup@example.com", "Second", "User"))
            .await
            .unwrap();

        assert!(first);
        assert!(!second);
    }

    #[tokio::test]
    async fn test_authenticate_exact_match_only() {
        let pool = test_pool().await;
        register_user(&pool, &candidate("ada@example.com", "Ada", "Lovelace"))
            .await
            .unwrap();

        assert!(authenticate_user(&pool, "ada@example.com", "secret").await.unwrap());
        assert!(!authenticate_user(&pool, "ada@example.com", "Secret").await.unwrap());
        assert!(!authenticate_user(&pool, "nobody@example.com", "secret").await.unwrap());
    }
}
