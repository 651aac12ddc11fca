//! Registration and email/password authentication.

use std::sync::Arc;

use tracing::warn;

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_database::repositories::UserRepository;
use todohub_entity::user::{CreateUser, User};

use crate::password::PasswordHasher;

/// Creates user accounts and authenticates credentials against them.
///
/// Expects inputs already validated for shape (email format, password
/// length) at the API boundary; this service owns normalization and
/// hashing.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl CredentialStore {
    /// Creates a new credential store.
    pub fn new(users: Arc<UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Registers a new user.
    ///
    /// The email is trimmed and lowercased before storage; the plaintext
    /// password is consumed here and never persisted.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<User> {
        let email = email.trim().to_lowercase();
        let (salt, password_hash) = self.hasher.hash(password)?;

        self.users
            .create(&CreateUser {
                email,
                salt,
                password_hash,
            })
            .await
    }

    /// Authenticates an email/password pair.
    ///
    /// An unknown email and a wrong password produce the same error; the
    /// response never reveals which check failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(Self::bad_credentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = user.id, "Password verification failed");
            return Err(Self::bad_credentials());
        }

        Ok(user)
    }

    fn bad_credentials() -> AppError {
        AppError::unauthenticated("Invalid email or password")
    }
}
