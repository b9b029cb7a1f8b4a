//! Task HTTP Handlers
//!
//! This module contains the HTTP handlers for task CRUD and reorder.
//!
//! Listing and creation are session-scoped: the current user is resolved
//! through the explicit session store threaded in via application state.
//! Update, delete, and reorder operate by task id with no ownership
//! check, matching the contract the existing frontend was built against
//! (a preserved gap, recorded in DESIGN.md).

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;

use super::db::{self, Task};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Task fields as clients send them.
///
/// Every field is optional or defaulted; each operation reads only the
/// fields it cares about (create ignores `id`, update reads only
/// `title`/`completed`, reorder reads only `id`/`priority`).
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// GET /tasks
///
/// Tasks owned by the session's current user. Without a session this is
/// an empty list, not an error.
pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Some(user) = state.sessions.current_user(&headers) else {
        return Ok(Json(Vec::new()));
    };
    let tasks = db::find_by_user_id(&state.db_pool, user.id).await?;
    Ok(Json(tasks))
}

/// POST /tasks
///
/// Creates a task owned by the session's current user and returns it
/// with its store-assigned id. Without a session this is a structured
/// 401, not a fault.
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<TaskBody>,
) -> Result<Json<Task>, ApiError> {
    let user = state
        .sessions
        .current_user(&headers)
        .ok_or(ApiError::NotLoggedIn)?;

    let task = db::insert_task(
        &state.db_pool,
        &body.title,
        body.completed,
        body.priority,
        body.date,
        user.id,
    )
    .await?;

    tracing::info!("Task {} created for user {}", task.id, user.id);
    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// Overwrites only `title` and `completed` from the body; priority, date,
/// and owner are untouched regardless of what the body contains.
pub async fn update_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(body): Json<TaskBody>,
) -> Result<Json<Task>, ApiError> {
    if db::find_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::TaskNotFound);
    }
    let task = db::update_task(&pool, id, &body.title, body.completed).await?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
///
/// 204 when the task existed and was deleted, 404 otherwise.
pub async fn delete_task(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !db::task_exists(&pool, id).await? {
        return Err(ApiError::TaskNotFound);
    }
    db::delete_task(&pool, id).await?;
    tracing::info!("Task {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /tasks/reorder
///
/// Overwrites `priority` for each body element whose id resolves to an
/// existing task; unknown or missing ids are silently skipped. Each
/// update is an independent write, so a failure mid-sequence leaves the
/// earlier updates applied.
pub async fn reorder_tasks(
    State(pool): State<SqlitePool>,
    Json(body): Json<Vec<TaskBody>>,
) -> Result<StatusCode, ApiError> {
    for item in &body {
        let Some(id) = item.id else { continue };
        if db::task_exists(&pool, id).await? {
            db::set_priority(&pool, id, item.priority).await?;
        }
    }
    Ok(StatusCode::OK)
}
