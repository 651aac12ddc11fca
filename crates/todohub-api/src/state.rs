//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use todohub_auth::credentials::CredentialStore;
use todohub_auth::password::PasswordHasher;
use todohub_auth::registry::TokenRegistry;
use todohub_auth::token::TokenCodec;
use todohub_core::config::AppConfig;
use todohub_database::repositories::{TodoRepository, TokenRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Bearer token codec.
    pub token_codec: Arc<TokenCodec>,
    /// Issued-token registry (revocation).
    pub token_registry: Arc<TokenRegistry>,
    /// Registration and credential authentication.
    pub credential_store: Arc<CredentialStore>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Todo repository.
    pub todo_repo: Arc<TodoRepository>,
}

impl AppState {
    /// Wires repositories and auth services over a connected pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let todo_repo = Arc::new(TodoRepository::new(db_pool.clone()));
        let token_repo = Arc::new(TokenRepository::new(db_pool.clone()));

        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let token_registry = Arc::new(TokenRegistry::new(Arc::clone(&token_repo)));
        let credential_store = Arc::new(CredentialStore::new(
            Arc::clone(&user_repo),
            PasswordHasher::new(),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            token_codec,
            token_registry,
            credential_store,
            user_repo,
            todo_repo,
        }
    }
}
