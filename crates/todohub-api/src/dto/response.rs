//! Response DTOs.
//!
//! Bodies use camelCase field names; that is the wire format clients
//! already speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use todohub_entity::todo::Todo;
use todohub_entity::user::User;

/// Public view of a user. Never carries the salt or the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// User ID.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A todo item as clients see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Todo ID.
    pub id: i64,
    /// Item text.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Owning user ID.
    pub user_id: i64,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            description: todo.description,
            completed: todo.completed,
            user_id: todo.user_id,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

/// Logout acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always "1" on success.
    pub success: String,
}

impl SuccessResponse {
    /// The canonical success body.
    pub fn ok() -> Self {
        Self {
            success: "1".to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Database connectivity: "ok" or "unavailable".
    pub database: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_is_camel_case_and_public_only() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            salt: "salt".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("salt").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn test_todo_json_owner_field_is_user_id_camel_case() {
        let todo = Todo {
            id: 3,
            description: "x".to_string(),
            completed: false,
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(TodoResponse::from(todo)).unwrap();
        assert_eq!(json.get("userId").unwrap(), 1);
    }

    #[test]
    fn test_success_body() {
        let json = serde_json::to_value(SuccessResponse::ok()).unwrap();
        assert_eq!(json.get("success").unwrap(), "1");
    }
}
