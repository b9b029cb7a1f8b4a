//! Database operations for tasks
//!
//! This module contains the task model and the keyed-record operations
//! the handlers are built on: insert with id assignment, lookup by id
//! and by owner, existence check, field-scoped updates, and delete.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

/// A to-do item owned by at most one user.
///
/// The owner is never serialized to clients; task endpoints exchange only
/// `{id, title, completed, priority, date}`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub priority: i64,
    pub date: Option<NaiveDate>,
    #[serde(skip)]
    pub user_id: Option<i64>,
}

/// Insert a new task owned by `user_id`; the store assigns the id.
pub async fn insert_task(
    pool: &SqlitePool,
    title: &str,
    completed: bool,
    priority: i64,
    date: Option<NaiveDate>,
    user_id: i64,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, completed, priority, date, user_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, completed, priority, date, user_id
        "#,
    )
    .bind(title)
    .bind(completed)
    .bind(priority)
    .bind(date)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Get a task by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, completed, priority, date, user_id
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All tasks owned by a user, in store order.
pub async fn find_by_user_id(pool: &SqlitePool, user_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, completed, priority, date, user_id
        FROM tasks
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Whether a task with this id exists.
pub async fn task_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Overwrite only `title` and `completed`, returning the merged row.
pub async fn update_task(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    completed: bool,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = ?, completed = ?
        WHERE id = ?
        RETURNING id, title, completed, priority, date, user_id
        "#,
    )
    .bind(title)
    .bind(completed)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Overwrite only `priority`.
pub async fn set_priority(pool: &SqlitePool, id: i64, priority: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE tasks SET priority = ? WHERE id = ?")
        .bind(priority)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a task by id.
pub async fn delete_task(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::service::register_user;
    use crate::auth::users::NewUser;
    use crate::test_support::test_pool;

    async fn pool_with_user() -> (SqlitePool, i64) {
        let pool = test_pool().await;
        let candidate = NewUser {
            password: "secret".to_string(),
            date_of_birth: String::new(),
            email: "owner@example.com".to_string(),
            first_name: "Task".to_string(),
            last_name: "Owner".to_string(),
        };
        register_user(&pool, &candidate).await.unwrap();
        let user = crate::auth::users::get_user_by_email(&pool, "owner@example.com")
            .await
            .unwrap()
            .unwrap();
        (pool, user.id)
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_owner() {
        let (pool, user_id) = pool_with_user().await;

        let task = insert_task(&pool, "T", false, 0, None, user_id).await.unwrap();
        assert!(task.id > 0);
        assert_eq!(task.user_id, Some(user_id));
    }

    #[tokio::test]
    async fn test_update_leaves_priority_and_date_untouched() {
        let (pool, user_id) = pool_with_user().await;
        let date = NaiveDate::from_ymd_opt(2026, 1, 15);
        let task = insert_task(&pool, "T", false, 5, date, user_id).await.unwrap();

        let updated = update_task(&pool, task.id, "T2", true).await.unwrap();
        assert_eq!(updated.title, "T2");
        assert!(updated.completed);
        assert_eq!(updated.priority, 5);
        assert_eq!(updated.date, date);
        assert_eq!(updated.user_id, Some(user_id));
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let (pool, user_id) = pool_with_user().await;
        let task = insert_task(&pool, "T", false, 0, None, user_id).await.unwrap();

        assert!(task_exists(&pool, task.id).await.unwrap());
        delete_task(&pool, task.id).await.unwrap();
        assert!(!task_exists(&pool, task.id).await.unwrap());
    }
}
