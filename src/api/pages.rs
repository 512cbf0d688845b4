// src/api/pages.rs
// Server-rendered page and the plain-HTML form endpoints it posts to

use axum::{
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

use super::error::{
    ApiError, ApiResult, IntoApiError, IntoApiErrorOption, LOAD_TASKS_FAILED, TASK_NOT_FOUND,
};
use crate::error::TaskError;
use crate::state::AppState;
use crate::tasks::{CreateTaskRequest, NewTask};
use crate::ui::{App, render_page};

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let tasks = state.tasks.list().await.into_api_error(LOAD_TASKS_FAILED)?;
    debug!(count = tasks.len(), "Rendering task page");
    Ok(Html(render_page(&App::new(tasks))))
}

/// Add-task form; a rejected title re-renders the page with an alert
pub async fn create_task_form(
    State(state): State<AppState>,
    form: Result<Form<CreateTaskRequest>, FormRejection>,
) -> ApiResult<Response> {
    let Form(req) = form?;

    match NewTask::try_from(req) {
        Ok(new_task) => {
            let task = state.tasks.create(new_task).await?;
            info!(id = task.id, "Created task from form");
            Ok(Redirect::to("/").into_response())
        }
        Err(TaskError::Validation(message)) => {
            let tasks = state.tasks.list().await?;
            let page = render_page(&App::new(tasks).with_error(message));
            Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn toggle_task_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Redirect> {
    let Path(id) = id?;
    let task = state
        .tasks
        .toggle(id)
        .await?
        .ok_or_not_found(TASK_NOT_FOUND)?;
    info!(id, completed = task.completed, "Toggled task from form");
    Ok(Redirect::to("/"))
}

pub async fn delete_task_form(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Redirect> {
    let Path(id) = id?;
    if !state.tasks.delete(id).await? {
        return Err(ApiError::not_found(TASK_NOT_FOUND));
    }
    info!(id, "Deleted task from form");
    Ok(Redirect::to("/"))
}
