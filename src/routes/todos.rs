use crate::{
    auth::{ensure_owner, AuthenticatedUser},
    error::AppError,
    models::{Task, TaskInput},
    state::AppState,
};
use actix_web::{delete, get, http::header, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Lists the caller's tasks.
///
/// ## Responses:
/// - `200 OK`: JSON array of the caller's tasks, oldest first.
/// - `401 Unauthorized`: missing or invalid token.
#[get("")]
pub async fn list_todos(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.list_by_owner(&caller.user_id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the caller.
///
/// The id is generated and the owner is the caller, whatever the body says.
///
/// ## Responses:
/// - `201 Created`: the new task, with a `Location` header.
/// - `400 Bad Request`: malformed body or failed validation.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_todo(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = Task::new(task_data.into_inner(), &caller.user_id);
    state.tasks.insert(&task).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/todos/{}", task.id)))
        .json(task))
}

/// Retrieves one of the caller's tasks.
///
/// ## Responses:
/// - `200 OK`: the task.
/// - `401 Unauthorized`: missing or invalid token.
/// - `403 Forbidden`: the task belongs to another user.
/// - `404 Not Found`: no task with this id.
#[get("/{id}")]
pub async fn get_todo(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task = ensure_owner(state.tasks.find_by_id(&task_id).await?, &caller)?;
    Ok(HttpResponse::Ok().json(task))
}

/// Replaces all mutable fields of one of the caller's tasks.
///
/// The id is pinned to the path and the owner to the caller.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `400 Bad Request`: malformed body or failed validation.
/// - `401 Unauthorized`, `403 Forbidden`, `404 Not Found`: as for `get_todo`.
#[put("/{id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    task_id: web::Path<String>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let existing = ensure_owner(state.tasks.find_by_id(&task_id).await?, &caller)?;
    task_data.validate()?;

    let task = Task::with_id(existing.id, task_data.into_inner(), &caller.user_id);
    state.tasks.update(&task).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes one of the caller's tasks.
///
/// ## Responses:
/// - `204 No Content`: deleted.
/// - `401 Unauthorized`, `403 Forbidden`, `404 Not Found`: as for `get_todo`.
#[delete("/{id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    caller: AuthenticatedUser,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task = ensure_owner(state.tasks.find_by_id(&task_id).await?, &caller)?;
    state.tasks.delete(&task.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
