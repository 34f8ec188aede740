use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Priority given to a task when the client sends none.
pub const DEFAULT_PRIORITY: &str = "Medium";

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

/// Request body for creating or replacing a task.
///
/// Only the mutable fields are accepted. An `id` or `userId` in the body is
/// ignored: the id comes from the path or is generated, and the owner is
/// always the caller.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// The title of the task, at most 200 characters. Missing means empty.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: String,

    /// Free-form description, at most 1000 characters.
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,

    #[serde(default)]
    pub completed: bool,

    /// Optional deadline. Kept as the client sent it.
    #[serde(default)]
    pub deadline: Option<String>,

    /// Free-form label such as `Low`, `Medium` or `High`.
    #[serde(default = "default_priority")]
    #[validate(length(max = 50))]
    pub priority: String,
}

/// A task as stored in the `todos` table and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub deadline: Option<String>,
    pub priority: String,
    /// Identifier of the owning user.
    pub user_id: String,
}

impl Task {
    /// Creates a new task owned by `owner_id` with a freshly generated id.
    pub fn new(input: TaskInput, owner_id: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input, owner_id)
    }

    /// Builds a task with a fixed id, as used by full-replace updates.
    pub fn with_id(id: String, input: TaskInput, owner_id: &str) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            deadline: input.deadline,
            priority: input.priority,
            user_id: owner_id.to_string(),
        }
    }
}
