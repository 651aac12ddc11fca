//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use todohub_core::error::AppError;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password, consumed by the hasher and never stored.
    #[validate(length(min = 7, max = 100, message = "Password must be 7-100 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Create todo request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    /// Item text.
    pub description: String,
    /// Completion flag, defaults to false.
    #[serde(default)]
    pub completed: bool,
}

/// Partial todo update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// New item text.
    pub description: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// Query parameters for listing todos.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoListQuery {
    /// Substring match on the description.
    pub q: Option<String>,
    /// Completion filter: "true" or "false"; any other value is ignored.
    pub completed: Option<String>,
}

impl TodoListQuery {
    /// Parse the completion filter the way the wire format defines it.
    pub fn completed_filter(&self) -> Option<bool> {
        match self.completed.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// The substring filter, ignoring blank input.
    pub fn query_filter(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(String::from)
    }
}

/// Trim a todo description and enforce the 1-250 character bound.
pub fn normalize_description(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 250 {
        return Err(AppError::validation(
            "Description must be 1-250 characters",
        ));
    }
    Ok(trimmed.to_string())
}
