//! Token record repository implementation.

use sqlx::PgPool;

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_entity::token::TokenRecord;

/// Repository for issued-token records.
///
/// Rows hold only the hash of a bearer string; deleting a row revokes the
/// corresponding token.
#[derive(Debug, Clone)]
pub struct TokenRepository {
    pool: PgPool,
}

impl TokenRepository {
    /// Create a new token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a new token hash.
    pub async fn create(&self, token_hash: &str) -> AppResult<TokenRecord> {
        sqlx::query_as::<_, TokenRecord>(
            "INSERT INTO tokens (token_hash) VALUES ($1) RETURNING *",
        )
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store token", e))
    }

    /// Find a token record by its hash.
    pub async fn find_by_hash(&self, token_hash: &str) -> AppResult<Option<TokenRecord>> {
        sqlx::query_as::<_, TokenRecord>("SELECT * FROM tokens WHERE token_hash = $1")
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find token by hash", e)
            })
    }

    /// Delete a token record by id. Deleting an already-deleted or unknown
    /// id is not an error at this layer.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM tokens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete token", e))?;
        Ok(())
    }
}
