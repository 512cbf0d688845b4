// src/api/tasks.rs
// JSON task endpoints under /api/tasks

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::info;

use super::error::{
    ApiError, ApiResult, IntoApiError, IntoApiErrorOption, LOAD_TASKS_FAILED, TASK_NOT_FOUND,
};
use crate::state::AppState;
use crate::tasks::{CreateTaskRequest, NewTask, Task, TaskUpdate};

pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list().await.into_api_error(LOAD_TASKS_FAILED)?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(req) = payload?;
    let new_task = NewTask::try_from(req)?;

    let task = state.tasks.create(new_task).await?;
    info!(id = task.id, "Created task");

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Task>> {
    let Path(id) = id?;
    let task = state.tasks.get(id).await?.ok_or_not_found(TASK_NOT_FOUND)?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let Path(id) = id?;
    let Json(update) = payload?;

    let task = state
        .tasks
        .update(id, &update)
        .await?
        .ok_or_not_found(TASK_NOT_FOUND)?;
    info!(id, "Updated task");

    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    if !state.tasks.delete(id).await? {
        return Err(ApiError::not_found(TASK_NOT_FOUND));
    }
    info!(id, "Deleted task");

    Ok(StatusCode::NO_CONTENT)
}
