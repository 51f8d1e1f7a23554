/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use registry_server::{create_router, state::AppState};
use registry_storage::UserStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Usernames present after the schema step on a fresh database
pub const SEEDED: [&str; 4] = ["toms", "alice", "bob", "charlie"];

/// Router over a seeded SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    pub store: Arc<UserStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("users.db").display());

        let store = UserStore::new(&db_url).unwrap();
        store.ensure_schema().await.unwrap();
        let store = Arc::new(store);

        let router = create_router(AppState::new(Arc::clone(&store)));

        Self {
            router,
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and return status plus the body parsed as JSON
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn verify(&self, method: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri("/api/verify").method(method);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn list(&self) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn add(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/api/users")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }
}
