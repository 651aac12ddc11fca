//! Shared test helpers for integration tests.
//!
//! Tests run against a real PostgreSQL database named by the
//! `TODOHUB_TEST_DATABASE_URL` environment variable. When the variable is
//! unset each test returns early so the suite passes without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use todohub_api::AppState;
use todohub_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database
    /// is configured.
    pub async fn spawn() -> Option<Self> {
        let url = std::env::var("TODOHUB_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                token_sign_key: "test-sign-key".to_string(),
                token_cipher_key: "test-cipher-key".to_string(),
            },
            logging: LoggingConfig::default(),
        };

        let db = todohub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        todohub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.into_pool();

        // Tests in one binary run in parallel and each uses its own email
        // addresses, so the wipe must happen exactly once per run.
        static CLEANED: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();
        CLEANED
            .get_or_init(|| async {
                Self::clean_database(&db_pool).await;
            })
            .await;

        let state = AppState::build(config, db_pool.clone());
        let router = todohub_api::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        // Order matters: todos reference users.
        let tables = ["tokens", "todos", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Register a user through the API
    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/users",
            Some(serde_json::json!({
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Login and return the bearer string from the `Auth` response header
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .auth_header
            .expect("No Auth header in login response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Auth", token);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let auth_header = response
            .headers()
            .get("auth")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            auth_header,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Value of the `Auth` response header, when present
    pub auth_header: Option<String>,
    /// Parsed JSON body
    pub body: Value,
}
