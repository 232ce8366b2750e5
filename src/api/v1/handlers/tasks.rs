/*
 * Responsibility
 * - /{user_id}/tasks CRUD handlers
 * - Every handler runs verify_user_access (verified subject == path owner)
 *   before touching the repo, list included.
 * - Repo calls are always scoped by the verified identity, never by the
 *   path value or anything client-supplied.
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::{
        dto::tasks::{CreateTaskRequest, TaskListResponse, TaskResponse, UpdateTaskRequest},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::task_repo,
    services::auth::access::verify_user_access,
    state::AppState,
};

pub async fn create_task(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(user_id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    verify_user_access(&auth.user_id, &user_id)?;
    req.validate()?;

    let row = task_repo::create(&state.db, &auth.user_id, &req.title, req.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path(user_id): Path<String>,
) -> Result<Json<TaskListResponse>, AppError> {
    verify_user_access(&auth.user_id, &user_id)?;

    let rows = task_repo::list(&state.db, &auth.user_id).await?;
    let tasks = rows.into_iter().map(TaskResponse::from).collect();

    Ok(Json(TaskListResponse { tasks }))
}

pub async fn get_task(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path((user_id, task_id)): Path<(String, Uuid)>,
) -> Result<Json<TaskResponse>, AppError> {
    verify_user_access(&auth.user_id, &user_id)?;

    let row = task_repo::get(&state.db, &auth.user_id, task_id)
        .await?
        .ok_or(AppError::not_found("task"))?;

    Ok(Json(row.into()))
}

pub async fn update_task(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path((user_id, task_id)): Path<(String, Uuid)>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    verify_user_access(&auth.user_id, &user_id)?;
    req.validate()?;

    // description tri-state:
    // - None: do not update
    // - Some(None): clear
    // - Some(Some(v)): set v
    let description: Option<Option<&str>> = req.description.as_ref().map(|inner| inner.as_deref());

    let row = task_repo::update(
        &state.db,
        &auth.user_id,
        task_id,
        req.title.as_deref(),
        description,
    )
    .await?
    .ok_or(AppError::not_found("task"))?;

    Ok(Json(row.into()))
}

pub async fn toggle_complete(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path((user_id, task_id)): Path<(String, Uuid)>,
) -> Result<Json<TaskResponse>, AppError> {
    verify_user_access(&auth.user_id, &user_id)?;

    let row = task_repo::toggle_complete(&state.db, &auth.user_id, task_id)
        .await?
        .ok_or(AppError::not_found("task"))?;

    Ok(Json(row.into()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    Path((user_id, task_id)): Path<(String, Uuid)>,
) -> Result<StatusCode, AppError> {
    verify_user_access(&auth.user_id, &user_id)?;

    let deleted = task_repo::delete(&state.db, &auth.user_id, task_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("task"))
    }
}
