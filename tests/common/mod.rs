//! Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use mockall::mock;
use sqlx::SqlitePool;
use tower::ServiceExt;

use library_server::{
    api,
    config::AppConfig,
    db,
    models::Category,
    repository::{CategoryStore, Repository},
    services::Services,
    AppResult, AppState,
};

mock! {
    pub Store {}

    #[async_trait]
    impl CategoryStore for Store {
        async fn list(&self) -> AppResult<Vec<Category>>;
        async fn get(&self, id: i64) -> AppResult<Option<Category>>;
        async fn ready(&self) -> AppResult<bool>;
    }
}

/// In-memory store with schema and seed data
pub async fn seeded_pool() -> SqlitePool {
    let pool = db::open_in_memory().await.unwrap();
    db::initialize(&pool).await.unwrap();
    pool
}

/// In-memory store with schema but no categories
pub async fn empty_pool() -> SqlitePool {
    let pool = db::open_in_memory().await.unwrap();
    db::ensure_schema(&pool).await.unwrap();
    pool
}

pub fn app_with_pool(pool: SqlitePool) -> Router {
    let services = Services::new(Repository::new(pool));
    api::router(AppState::new(AppConfig::default(), services))
}

pub fn app_with_store(store: MockStore) -> Router {
    let services = Services::with_store(Arc::new(store));
    api::router(AppState::new(AppConfig::default(), services))
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
