//! Todo repository implementation.
//!
//! Every query is scoped by the owning user id; a todo is never visible
//! to, or mutable by, anyone but its owner.

use sqlx::PgPool;

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_entity::todo::{CreateTodo, Todo, TodoFilter, UpdateTodo};

/// Repository for todo CRUD and query operations.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    /// Create a new todo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a todo by primary key, scoped to its owner.
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo by id", e))
    }

    /// List a user's todos, optionally filtered by description substring
    /// and/or completion status.
    pub async fn find_all(&self, user_id: i64, filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        let pattern = filter.query.as_ref().map(|q| format!("%{q}%"));

        sqlx::query_as::<_, Todo>(
            "SELECT * FROM todos WHERE user_id = $1 \
             AND ($2::text IS NULL OR description ILIKE $2) \
             AND ($3::boolean IS NULL OR completed = $3) \
             ORDER BY id ASC",
        )
        .bind(user_id)
        .bind(pattern)
        .bind(filter.completed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    /// Create a new todo.
    pub async fn create(&self, data: &CreateTodo) -> AppResult<Todo> {
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (description, completed, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.description)
        .bind(data.completed)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    /// Apply a partial update to a todo, scoped to its owner.
    ///
    /// Returns `None` when the todo does not exist or is owned by someone
    /// else.
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        data: &UpdateTodo,
    ) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            "UPDATE todos SET description = COALESCE($3, description), \
                              completed = COALESCE($4, completed), \
                              updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.description)
        .bind(data.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))
    }

    /// Delete a todo, scoped to its owner. Returns how many rows were
    /// deleted (0 or 1).
    pub async fn delete(&self, id: i64, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;

        Ok(result.rows_affected())
    }
}
