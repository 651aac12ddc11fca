//! User handlers — register, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::info;

use todohub_auth::token::TokenType;
use todohub_core::error::{AppError, ErrorKind};

use crate::dto::check;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{PublicUser, SuccessResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Response header the bearer string is returned in at login.
const AUTH_HEADER: HeaderName = HeaderName::from_static("auth");

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    check(&req)?;

    let user = state
        .credential_store
        .register(&req.email, &req.password)
        .await?;

    info!(user_id = user.id, "User registered");
    Ok(Json(PublicUser::from(user)))
}

/// POST /users/login
///
/// On success the opaque bearer string is returned in the `Auth` response
/// header, not the body. Failed logins are a bare 401 with an empty body.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let user = match state
        .credential_store
        .authenticate(&req.email, &req.password)
        .await
    {
        Ok(user) => user,
        Err(e) if e.kind == ErrorKind::Unauthenticated => {
            return Ok(StatusCode::UNAUTHORIZED.into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let bearer = state
        .token_codec
        .issue(user.id, TokenType::Authentication)?;
    state.token_registry.register(&bearer).await?;

    let header_value = HeaderValue::from_str(&bearer)
        .map_err(|e| AppError::internal(format!("Unrepresentable bearer string: {e}")))?;

    info!(user_id = user.id, "User logged in");

    let mut response = Json(PublicUser::from(user)).into_response();
    response.headers_mut().insert(AUTH_HEADER, header_value);
    Ok(response)
}

/// POST /users/logout and DELETE /users/login
///
/// Deleting the token record is the revocation: the bearer string still
/// decodes afterwards, but the auth gate rejects it at the registry step.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.token_registry.revoke(auth.token_record.id).await?;

    info!(user_id = auth.user.id, "User logged out");
    Ok(Json(SuccessResponse::ok()))
}
