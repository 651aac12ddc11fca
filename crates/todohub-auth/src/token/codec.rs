//! Bearer token codec: AES-256-GCM payload inside an HMAC-signed envelope.
//!
//! `issue` serializes `{id, type}`, encrypts it under the cipher key, and
//! signs the ciphertext into a JWT under the sign key. `decode` runs the
//! same steps in reverse, verifying the signature before any decryption is
//! attempted. No expiry claim is embedded; revocation happens through the
//! token registry, never through the codec.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sha2::{Digest, Sha256};

use todohub_core::config::AuthConfig;
use todohub_core::error::AppError;

use super::payload::{EnvelopeClaims, TokenPayload, TokenType};

/// Nonce size for AES-256-GCM (12 bytes / 96 bits).
const NONCE_SIZE: usize = 12;

/// Encodes and decodes opaque bearer strings.
///
/// Both keys are process configuration, read-only after construction.
/// Rotating either key invalidates every outstanding token (see
/// [`AuthConfig`]).
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret for signing the envelope.
    encoding_key: EncodingKey,
    /// HMAC secret for verifying the envelope.
    decoding_key: DecodingKey,
    /// Envelope validation settings (signature only, no expiry).
    validation: Validation,
    /// AES-256 key material, derived from the configured cipher key.
    cipher_key: [u8; 32],
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim; validity is the registry's concern.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        // The configured cipher key is free-form; SHA-256 turns it into the
        // fixed 32 bytes AES-256 requires.
        let cipher_key: [u8; 32] = Sha256::digest(config.token_cipher_key.as_bytes()).into();

        Self {
            encoding_key: EncodingKey::from_secret(config.token_sign_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_sign_key.as_bytes()),
            validation,
            cipher_key,
        }
    }

    /// Issues an opaque bearer string for the given user.
    pub fn issue(&self, user_id: i64, token_type: TokenType) -> Result<String, AppError> {
        let payload = TokenPayload {
            id: user_id,
            token_type,
        };
        let plaintext = serde_json::to_string(&payload)?;
        let encrypted = self.encrypt(&plaintext)?;

        let claims = EnvelopeClaims { token: encrypted };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token envelope: {e}")))
    }

    /// Decodes and validates a bearer string back into its payload.
    ///
    /// Fails closed: a bad signature, bad ciphertext, and a malformed
    /// payload all collapse into the same generic error so that callers
    /// cannot distinguish the failure modes.
    pub fn decode(&self, bearer: &str) -> Result<TokenPayload, AppError> {
        let envelope = decode::<EnvelopeClaims>(bearer, &self.decoding_key, &self.validation)
            .map_err(|_| Self::invalid_token())?;

        let plaintext = self
            .decrypt(&envelope.claims.token)
            .map_err(|_| Self::invalid_token())?;

        serde_json::from_str(&plaintext).map_err(|_| Self::invalid_token())
    }

    /// The single error every decode failure collapses into.
    fn invalid_token() -> AppError {
        AppError::unauthenticated("Invalid token")
    }

    /// Encrypt plaintext to `base64(nonce || ciphertext)`.
    fn encrypt(&self, plaintext: &str) -> Result<String, AppError> {
        let cipher = Aes256Gcm::new_from_slice(&self.cipher_key)
            .map_err(|e| AppError::internal(format!("Cipher init failed: {e}")))?;

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| AppError::internal(format!("Payload encryption failed: {e}")))?;

        let mut combined = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        combined.extend_from_slice(&nonce);
        combined.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(&combined))
    }

    /// Decrypt `base64(nonce || ciphertext)` back to plaintext.
    fn decrypt(&self, encoded: &str) -> Result<String, AppError> {
        let combined = BASE64
            .decode(encoded)
            .map_err(|e| AppError::unauthenticated(format!("Bad token encoding: {e}")))?;

        if combined.len() < NONCE_SIZE {
            return Err(AppError::unauthenticated("Ciphertext too short"));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let cipher = Aes256Gcm::new_from_slice(&self.cipher_key)
            .map_err(|e| AppError::internal(format!("Cipher init failed: {e}")))?;

        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| AppError::unauthenticated("Payload decryption failed"))?;

        String::from_utf8(plaintext)
            .map_err(|_| AppError::unauthenticated("Invalid UTF-8 in payload"))
    }
}
