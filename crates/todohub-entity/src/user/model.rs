//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user account.
///
/// The plaintext password is never stored: registration hashes it into
/// `salt` + `password_hash` before the row is written, and both columns
/// are excluded from serialized output.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Email address, lowercased before storage (unique).
    pub email: String,
    /// Random salt the password hash was derived with.
    #[serde(skip_serializing)]
    pub salt: String,
    /// Argon2id password hash (PHC string format).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized (lowercased) email address.
    pub email: String,
    /// Freshly generated salt.
    pub salt: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_never_serialized() {
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            salt: "somesalt".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("salt").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("email").unwrap(), "a@b.com");
    }
}
