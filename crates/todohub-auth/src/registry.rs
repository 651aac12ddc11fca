//! Issued-token registry.
//!
//! Stores a one-way hash of each issued bearer string, never the string
//! itself. Plain SHA-256 rather than a slow password hash: the bearer's
//! entropy is already high.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use todohub_core::result::AppResult;
use todohub_database::repositories::TokenRepository;
use todohub_entity::token::TokenRecord;

/// Registry of still-valid bearer tokens. Deleting a record revokes the
/// token independent of the codec's own validity.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    /// Token record repository.
    repo: Arc<TokenRepository>,
}

impl TokenRegistry {
    /// Creates a new token registry.
    pub fn new(repo: Arc<TokenRepository>) -> Self {
        Self { repo }
    }

    /// Stores the hash of a freshly issued bearer string.
    pub async fn register(&self, bearer: &str) -> AppResult<TokenRecord> {
        self.repo.create(&hash_bearer(bearer)).await
    }

    /// Looks up the record for a raw bearer string by hashing it the same
    /// way it was registered.
    pub async fn find_by_raw_token(&self, bearer: &str) -> AppResult<Option<TokenRecord>> {
        self.repo.find_by_hash(&hash_bearer(bearer)).await
    }

    /// Deletes a token record. Idempotent: revoking an already-revoked or
    /// unknown id is not an error at this layer; the auth gate is what
    /// reports "not authenticated".
    pub async fn revoke(&self, token_record_id: i64) -> AppResult<()> {
        self.repo.delete(token_record_id).await
    }
}

/// SHA-256 hex digest of a raw bearer string.
pub fn hash_bearer(bearer: &str) -> String {
    format!("{:x}", Sha256::digest(bearer.as_bytes()))
}
