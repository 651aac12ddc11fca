//! `AuthUser` extractor — the auth gate in front of every protected route.
//!
//! The registry is consulted before the codec, so a revoked token is
//! rejected before any signature verification or decryption runs. All
//! misses collapse into the same generic 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use todohub_core::error::AppError;
use todohub_entity::token::TokenRecord;
use todohub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request header carrying the raw bearer string.
const AUTH_HEADER: &str = "auth";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved user.
    pub user: User,
    /// The live token record backing this request; its id is what logout
    /// revokes.
    pub token_record: TokenRecord,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // An absent header behaves as an empty string: it hashes, misses
        // the registry, and fails like any other invalid token.
        let bearer = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        // 1. Revocation check. A registry miss means revoked or never
        //    issued; either way the token is dead.
        let token_record = state
            .token_registry
            .find_by_raw_token(bearer)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::from(Self::unauthenticated()))?;

        // 2. Decode the same raw value to recover the user id.
        let payload = state
            .token_codec
            .decode(bearer)
            .map_err(|_| ApiError::from(Self::unauthenticated()))?;

        // 3. The user must still exist.
        let user = state
            .user_repo
            .find_by_id(payload.id)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::from(Self::unauthenticated()))?;

        Ok(AuthUser { user, token_record })
    }
}

impl AuthUser {
    /// The one message every gate failure reports.
    fn unauthenticated() -> AppError {
        AppError::unauthenticated("Invalid token")
    }
}
