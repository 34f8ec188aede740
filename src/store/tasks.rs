use crate::{error::AppError, models::Task};
use sqlx::SqlitePool;

const TASK_COLUMNS: &str = "id, title, description, completed, deadline, priority, user_id";

/// Task store backed by the `todos` table.
#[derive(Debug, Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All tasks owned by `user_id`, in insertion order.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Task>, AppError> {
        let sql = format!(
            "SELECT {} FROM todos WHERE user_id = ? ORDER BY rowid",
            TASK_COLUMNS
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        let sql = format!("SELECT {} FROM todos WHERE id = ?", TASK_COLUMNS);
        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    pub async fn insert(&self, task: &Task) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO todos (id, title, description, completed, deadline, priority, user_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(&task.deadline)
        .bind(&task.priority)
        .bind(&task.user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Replaces every mutable column of the row with `task.id`.
    /// Does nothing when no such row exists.
    pub async fn update(&self, task: &Task) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE todos
             SET title = ?, description = ?, completed = ?, deadline = ?, priority = ?, user_id = ?
             WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(&task.deadline)
        .bind(&task.priority)
        .bind(&task.user_id)
        .bind(&task.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Removes the row with `id`, if any.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskInput, User, DEFAULT_PRIORITY};
    use crate::store::{test_support::memory_pool, UserStore};
    use pretty_assertions::assert_eq;

    async fn setup() -> (TaskStore, User, User) {
        let pool = memory_pool().await;
        let users = UserStore::new(pool.clone());
        let alice = User::new("Alice".into(), "alice@example.com".into(), "h".into());
        let bob = User::new("Bob".into(), "bob@example.com".into(), "h".into());
        users.insert(&alice).await.unwrap();
        users.insert(&bob).await.unwrap();
        (TaskStore::new(pool), alice, bob)
    }

    fn input(title: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: format!("{} description", title),
            completed: false,
            deadline: None,
            priority: DEFAULT_PRIORITY.into(),
        }
    }

    #[actix_rt::test]
    async fn test_list_by_owner_is_scoped_and_ordered() {
        let (store, alice, bob) = setup().await;
        let first = Task::new(input("first"), &alice.id);
        let second = Task::new(input("second"), &alice.id);
        let other = Task::new(input("bob's"), &bob.id);
        store.insert(&first).await.unwrap();
        store.insert(&other).await.unwrap();
        store.insert(&second).await.unwrap();

        let tasks = store.list_by_owner(&alice.id).await.unwrap();
        assert_eq!(tasks, vec![first, second]);

        assert!(store.list_by_owner("nobody").await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_update_replaces_mutable_fields() {
        let (store, alice, _) = setup().await;
        let task = Task::new(input("draft"), &alice.id);
        store.insert(&task).await.unwrap();

        let mut replacement = Task::with_id(task.id.clone(), input("final"), &alice.id);
        replacement.completed = true;
        replacement.deadline = Some("2025-06-01".into());
        replacement.priority = "High".into();
        store.update(&replacement).await.unwrap();

        let stored = store.find_by_id(&task.id).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[actix_rt::test]
    async fn test_update_and_delete_missing_are_noops() {
        let (store, alice, _) = setup().await;
        let ghost = Task::new(input("ghost"), &alice.id);

        store.update(&ghost).await.unwrap();
        store.delete(&ghost.id).await.unwrap();
        assert!(store.find_by_id(&ghost.id).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_delete_removes_row() {
        let (store, alice, _) = setup().await;
        let task = Task::new(input("done soon"), &alice.id);
        store.insert(&task).await.unwrap();

        store.delete(&task.id).await.unwrap();
        assert!(store.find_by_id(&task.id).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_owner_must_exist() {
        let (store, _, _) = setup().await;
        let orphan = Task::new(input("orphan"), "no-such-user");

        assert!(matches!(
            store.insert(&orphan).await,
            Err(AppError::DatabaseError(_))
        ));
    }
}
