//! Todo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo item owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Unique todo identifier.
    pub id: i64,
    /// Item text, 1-250 characters after trimming.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Owning user.
    pub user_id: i64,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
    /// When the todo was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Trimmed item text.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Owning user.
    pub user_id: i64,
}

/// Partial update of an existing todo. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New item text.
    pub description: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// Listing filter. All queries are additionally scoped by owning user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoFilter {
    /// Substring match on the description.
    pub query: Option<String>,
    /// Filter by completion status.
    pub completed: Option<bool>,
}
