use crate::auth::extractors::AuthenticatedUser;
use crate::error::AppError;
use crate::models::Task;

/// Resolves a task lookup against the caller.
///
/// A missing task is `NotFound`; a task owned by someone else is `Forbidden`.
/// Absence is reported first, so a caller can learn that an id exists but
/// never see or touch its contents.
pub fn ensure_owner(task: Option<Task>, caller: &AuthenticatedUser) -> Result<Task, AppError> {
    let task = task.ok_or_else(|| AppError::NotFound("Task not found".into()))?;
    if task.user_id != caller.user_id {
        log::debug!("User {} denied access to task {}", caller.user_id, task.id);
        return Err(AppError::Forbidden);
    }
    Ok(task)
}
