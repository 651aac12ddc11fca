//! Token payload types carried inside the encrypted envelope.

use serde::{Deserialize, Serialize};

/// The decrypted contents of a bearer token.
///
/// Carries no expiry: a token remains decodable forever unless its registry
/// record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// The user this token was issued to.
    pub id: i64,
    /// What the token authorizes.
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

/// Distinguishes token purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// A session token issued at login.
    Authentication,
}

/// JWT claims of the signed envelope.
///
/// The only claim is the base64-encoded encrypted payload; the envelope's
/// job is tamper detection, not data transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeClaims {
    /// `base64(nonce || ciphertext)` of the serialized [`TokenPayload`].
    pub token: String,
}
