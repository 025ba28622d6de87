//! Task handlers - CRUD operations for tasks.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use taskboard_core::Task;

use crate::dto::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// List tasks, optionally filtered by `?completed=`.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, HttpError> {
    Ok(Json(state.core.tasks().list(query.into()).await?))
}

/// Get a single task by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, HttpError> {
    Ok(Json(state.core.tasks().get(id).await?))
}

/// Create a task.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), HttpError> {
    let task = state.core.tasks().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, HttpError> {
    Ok(Json(state.core.tasks().update(id, req.into()).await?))
}

/// Delete a task.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.core.tasks().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
