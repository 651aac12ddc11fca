//! Route definitions for the TodoHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Auth is enforced per-route through the `AuthUser`
//! extractor, not a blanket layer: the login/register routes must stay
//! reachable without a token.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(user_routes())
        .merge(todo_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// User endpoints: register, login, logout.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route("/users/login", post(handlers::user::login))
        .route("/users/logout", post(handlers::user::logout))
        // Legacy alias for logout kept for older clients.
        .route("/users/login", delete(handlers::user::logout))
}

/// Todo CRUD, all auth-required and user-scoped.
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(handlers::todo::list_todos))
        .route("/todos", post(handlers::todo::create_todo))
        .route("/todos/{id}", get(handlers::todo::get_todo))
        .route("/todos/{id}", put(handlers::todo::update_todo))
        .route("/todos/{id}", delete(handlers::todo::delete_todo))
}

/// Root and health endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;
    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.allow_methods(Any).allow_headers(Any)
}
