#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use bolsa_laboral_backend::{
    build_router,
    config::DatabaseConfig,
    database::pool::create_lazy_pool,
    error::Result,
    services::upload_service::{ObjectStorage, UploadOptions, UploadSource},
    AppState,
};
use mockall::mock;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

mock! {
    pub Storage {}

    #[async_trait]
    impl ObjectStorage for Storage {
        async fn upload(&self, source: UploadSource, options: UploadOptions) -> Result<JsonValue>;
    }
}

/// Points at a port nothing listens on; any handler that reaches the store fails fast.
pub fn unreachable_db() -> DatabaseConfig {
    DatabaseConfig {
        url: None,
        host: "127.0.0.1".into(),
        port: 1,
        user: "postgres".into(),
        password: None,
        name: "postgres".into(),
        require_ssl: false,
        max_connections: 1,
        acquire_timeout_secs: 1,
    }
}

pub fn app_with_storage(storage: MockStorage) -> Router {
    let pool = create_lazy_pool(&unreachable_db()).expect("lazy pool");
    build_router(AppState::with_storage(pool, Arc::new(storage)))
}

pub fn app() -> Router {
    app_with_storage(MockStorage::new())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            JsonValue::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, body: &JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
