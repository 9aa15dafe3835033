/// Task CRUD endpoints
///
/// Every operation here acts on behalf of one user: the id arrives as the
/// `userId` query parameter for reads and deletes, and inside the JSON
/// body for creates and updates. Reads and writes are scoped to rows
/// owned by that user; an id that exists but belongs to someone else is
/// answered exactly like an id that does not exist.
///
/// # Endpoints
///
/// - `GET    /api/tasks?userId=` — list the user's tasks, newest first
/// - `GET    /api/tasks/:id?userId=` — fetch one task
/// - `POST   /api/tasks` — create a task
/// - `PUT    /api/tasks/:id` — update title/description/status
/// - `DELETE /api/tasks/:id?userId=` — delete (userId also accepted in
///   the body)
///
/// Mutations respond with the re-read persisted row, so defaults and
/// server-set timestamps are always reflected.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskdeck_shared::models::task::{CreateTask, Task, TaskStatus, UpdateTask};
use validator::Validate;

const MISSING_USER_ID: &str = "User ID is required";
const MISSING_TITLE: &str = "Title is required";
const INVALID_STATUS: &str = "Invalid status. Must be pending, in-progress, or completed";

/// Query parameters carrying the acting user
#[derive(Debug, Deserialize)]
pub struct TaskOwnerQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Create/update request body
///
/// Everything is optional at the serde level so that missing fields reach
/// the validators and produce the public error messages instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskPayload {
    #[validate(required(message = "Title is required"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub status: Option<String>,

    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

impl TaskPayload {
    /// Shape-checks the payload and resolves the typed pieces
    ///
    /// Validation order matches the endpoint contract: title and status
    /// first, the acting user afterwards. Returns the title, the
    /// description (defaulted to empty), and the parsed status if one was
    /// supplied.
    fn checked(&self) -> ApiResult<(String, String, Option<TaskStatus>)> {
        self.validate()?;

        let title = self.title.clone().unwrap_or_default();
        if title.trim().is_empty() {
            return Err(ApiError::BadRequest(MISSING_TITLE.to_string()));
        }

        let status = match self.status.as_deref() {
            Some(raw) => Some(
                TaskStatus::parse(raw)
                    .ok_or_else(|| ApiError::BadRequest(INVALID_STATUS.to_string()))?,
            ),
            None => None,
        };

        Ok((
            title,
            self.description.clone().unwrap_or_default(),
            status,
        ))
    }

    fn acting_user(&self) -> ApiResult<i64> {
        self.user_id
            .ok_or_else(|| ApiError::BadRequest(MISSING_USER_ID.to_string()))
    }
}

/// Body variant for DELETE requests that carry the user id there instead
/// of the query string
#[derive(Debug, Deserialize)]
pub struct DeleteTaskBody {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    pub message: String,
    pub id: i64,
}

fn require_user(query: &TaskOwnerQuery) -> ApiResult<i64> {
    query
        .user_id
        .ok_or_else(|| ApiError::BadRequest(MISSING_USER_ID.to_string()))
}

/// List tasks endpoint handler
///
/// # Errors
///
/// - `400 Bad Request`: missing userId
/// - `500 Internal Server Error`: store failure
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskOwnerQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let user_id = require_user(&query)?;

    let tasks = Task::list_for_user(&state.db, user_id).await?;

    Ok(Json(tasks))
}

/// Get single task endpoint handler
///
/// # Errors
///
/// - `400 Bad Request`: missing userId
/// - `404 Not Found`: no such task, or not owned by this user
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TaskOwnerQuery>,
) -> ApiResult<Json<Task>> {
    let user_id = require_user(&query)?;

    let task = Task::find_by_id_for_user(&state.db, id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Create task endpoint handler
///
/// The status defaults to `pending` when omitted; the description to the
/// empty string.
///
/// # Errors
///
/// - `400 Bad Request`: blank title, unknown status, or missing userId
/// - `500 Internal Server Error`: store failure
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let (title, description, status) = payload.checked()?;
    let user_id = payload.acting_user()?;

    let task = Task::create(
        &state.db,
        CreateTask {
            user_id,
            title,
            description,
            status: status.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(task_id = task.id, user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update task endpoint handler
///
/// A status is mandatory on update — there is no previous-payload merge.
///
/// # Errors
///
/// - `400 Bad Request`: blank title, missing/unknown status, or missing
///   userId
/// - `404 Not Found`: no such task, or not owned by this user
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> ApiResult<Json<Task>> {
    let (title, description, status) = payload.checked()?;
    let status = status.ok_or_else(|| ApiError::BadRequest(INVALID_STATUS.to_string()))?;
    let user_id = payload.acting_user()?;

    let updated = Task::update_for_user(
        &state.db,
        id,
        user_id,
        UpdateTask {
            title,
            description,
            status,
        },
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound(
            "Task not found or access denied".to_string(),
        ));
    }

    // Re-read so the response carries the refreshed updatedAt
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    tracing::info!(task_id = id, user_id, "Task updated");

    Ok(Json(task))
}

/// Delete task endpoint handler
///
/// The acting user comes from the query string when present, otherwise
/// from the JSON body.
///
/// # Errors
///
/// - `400 Bad Request`: missing userId
/// - `404 Not Found`: no such task, or not owned by this user
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<TaskOwnerQuery>,
    body: Option<Json<DeleteTaskBody>>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let user_id = query
        .user_id
        .or_else(|| body.and_then(|Json(b)| b.user_id))
        .ok_or_else(|| ApiError::BadRequest(MISSING_USER_ID.to_string()))?;

    let deleted = Task::delete_for_user(&state.db, id, user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(
            "Task not found or access denied".to_string(),
        ));
    }

    tracing::info!(task_id = id, user_id, "Task deleted");

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
        id,
    }))
}
