/// Common test utilities for integration tests
///
/// Provides a `TestContext` that assembles the real router over a fresh
/// in-memory SQLite database, plus helpers for driving it with JSON
/// requests and registering users/tasks through the public API.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::{ApiConfig, Config, DatabaseConfig};
use taskdeck_shared::db::migrations::run_migrations;
use tower::Service as _;

/// Test context containing the app and a handle on its database
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context with a fresh migrated database
    pub async fn new() -> anyhow::Result<Self> {
        // One connection, or each pool checkout would see its own empty
        // in-memory database
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
                production: false,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(Self { db, app })
    }
}

/// Sends a request and returns the status plus the parsed JSON body
///
/// Non-JSON bodies (e.g. extractor rejections) come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().call(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Registers a user through the API and returns their id
pub async fn signup_user(app: &Router, name: &str, email: &str, password: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/signup",
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");
    body["user"]["id"].as_i64().expect("signup returned no id")
}

/// Creates a task through the API and returns the response body
pub async fn create_task(app: &Router, user_id: i64, title: &str, status: Option<&str>) -> Value {
    let mut payload = json!({ "title": title, "userId": user_id });
    if let Some(status) = status {
        payload["status"] = json!(status);
    }

    let (status_code, body) = send(app, "POST", "/api/tasks", Some(payload)).await;
    assert_eq!(status_code, StatusCode::CREATED, "create failed: {body}");
    body
}
