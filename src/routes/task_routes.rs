/**
 * Task Route Configuration
 *
 * Routes for task CRUD and reorder.
 */

use axum::Router;

use crate::server::state::AppState;
use crate::tasks::{create_task, delete_task, list_tasks, reorder_tasks, update_task};

/// Configure task routes
///
/// - `GET /tasks` - Tasks owned by the session user (empty list without
///   a session)
/// - `POST /tasks` - Create a task owned by the session user (401
///   without a session)
/// - `POST /tasks/reorder` - Overwrite priorities for resolvable ids
/// - `PUT /tasks/{id}` - Overwrite title/completed only (no ownership
///   check)
/// - `DELETE /tasks/{id}` - Delete by id (no ownership check)
pub fn configure_task_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/tasks",
            axum::routing::get(list_tasks).post(create_task),
        )
        .route("/tasks/reorder", axum::routing::post(reorder_tasks))
        .route(
            "/tasks/{id}",
            axum::routing::put(update_task).delete(delete_task),
        )
}
