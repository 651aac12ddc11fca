//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Both keys are fixed for the lifetime of the process and of every token
/// expected to stay valid: rotating either key invalidates all outstanding
/// bearer tokens. Tokens carry no expiry of their own and are revoked
/// through the token registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for the signed token envelope (HMAC-SHA256).
    #[serde(default = "default_sign_key")]
    pub token_sign_key: String,
    /// Secret key for the encrypted token payload (AES-256-GCM, derived
    /// through SHA-256 to fixed-size key material).
    #[serde(default = "default_cipher_key")]
    pub token_cipher_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_sign_key: default_sign_key(),
            token_cipher_key: default_cipher_key(),
        }
    }
}

fn default_sign_key() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_cipher_key() -> String {
    "CHANGE_ME_TOO_IN_PRODUCTION".to_string()
}
