/*
 * Responsibility
 * - URL structure for v1: /{user_id}/tasks and /{user_id}/tasks/{task_id}
 * - The whole tree is mounted behind the access-token middleware in app.rs;
 *   /health lives outside it.
 */
use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use crate::api::v1::handlers::tasks::{
    create_task, delete_task, get_task, list_tasks, toggle_complete, update_task,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/{user_id}/tasks/{task_id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/{user_id}/tasks/{task_id}/complete", patch(toggle_complete))
}
