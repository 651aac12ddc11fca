//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use todohub_core::error::AppError;

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Returns `(salt, password_hash)`. The salt is never reused across
    /// calls; the hash is a PHC-format string that also embeds the salt,
    /// which is what [`verify`](Self::verify) recomputes against.
    pub fn hash(&self, password: &str) -> Result<(String, String), AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok((salt.as_str().to_string(), hash.to_string()))
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Recomputes with the stored salt and compares in constant time.
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let (_, hash) = hasher.hash("secret12").unwrap();

        assert!(hasher.verify("secret12", &hash).unwrap());
        assert!(!hasher.verify("secret13", &hash).unwrap());
    }

    #[test]
    fn test_salt_is_fresh_per_call() {
        let hasher = PasswordHasher::new();
        let (salt_a, hash_a) = hasher.hash("secret12").unwrap();
        let (salt_b, hash_b) = hasher.hash("secret12").unwrap();

        assert_ne!(salt_a, salt_b);
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error_not_a_mismatch() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("secret12", "not-a-phc-string").is_err());
    }
}
