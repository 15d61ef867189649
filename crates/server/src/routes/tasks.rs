use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use common::types::OnlineStatus;
use models::{NewTask, Task, TaskPatch};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/tasks/", post(create_task).get(list_tasks))
        .route("/tasks", post(create_task).get(list_tasks))
        .route("/tasks/:id", get(get_task).patch(update_task).delete(delete_task))
        .route("/tasks/:id/complete", post(complete_task))
}

#[utoipa::path(get, path = "/", tag = "tasks", responses((status = 200, description = "Service is online", body = crate::openapi::OnlineStatusDoc)))]
pub async fn root() -> Json<OnlineStatus> {
    Json(OnlineStatus::now())
}

#[utoipa::path(
    post, path = "/tasks/", tag = "tasks",
    request_body = crate::openapi::TaskCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TaskDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), JsonApiError> {
    let Json(body) = payload?;
    let input = NewTask::from_json(&body)?;
    let created = state.tasks.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/tasks/", tag = "tasks",
    responses((status = 200, description = "All tasks in creation order", body = [crate::openapi::TaskDoc]))
)]
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

#[utoipa::path(
    get, path = "/tasks/{id}", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TaskDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, JsonApiError> {
    Ok(Json(state.tasks.get(&id).await?))
}

#[utoipa::path(
    patch, path = "/tasks/{id}", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    request_body = crate::openapi::TaskUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TaskDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, JsonApiError> {
    let Json(body) = payload?;
    let patch = TaskPatch::from_json(&body)?;
    if patch.is_empty() {
        warn!(%id, "patch without updatable fields");
    }
    Ok(Json(state.tasks.update(&id, patch).await?))
}

#[utoipa::path(
    delete, path = "/tasks/{id}", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.tasks.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/tasks/{id}/complete", tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Completed", body = crate::openapi::TaskDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, JsonApiError> {
    let task = state.tasks.set_completed(&id, true).await?;
    info!(%id, "task completed");
    Ok(Json(task))
}
