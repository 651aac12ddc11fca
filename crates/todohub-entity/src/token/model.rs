//! Token record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored hash representing an issued, still-valid bearer token.
///
/// The record carries no user reference: the user is recovered by decoding
/// the bearer string itself. Deleting the record is the revocation
/// mechanism; there is no expiry column.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TokenRecord {
    /// Unique record identifier.
    pub id: i64,
    /// SHA-256 hex digest of the raw bearer string.
    pub token_hash: String,
    /// When the token was issued (login time).
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}
