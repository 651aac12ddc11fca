//! Root and health check handlers (no auth required).

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /
pub async fn root() -> &'static str {
    "Todo API root"
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(1) => "ok",
        _ => "unavailable",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
