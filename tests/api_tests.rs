//! HTTP behaviour of the router, driven in-process

mod common;

use std::collections::HashSet;

use axum::http::{header, Method, StatusCode};
use serde_json::Value;

use common::{app_with_pool, app_with_store, body_string, empty_pool, seeded_pool, send, MockStore};
use library_server::{api::root::BANNER, models::SEED_CATEGORIES, AppError};

fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
}

#[tokio::test]
async fn seeded_store_lists_all_categories_in_id_order() {
    let app = app_with_pool(seeded_pool().await);

    let response = send(app, Method::GET, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_cors_headers(response.headers());

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 14);

    let mut last_id = 0;
    let mut names = HashSet::new();
    for item in items {
        let object = item.as_object().unwrap();
        assert_eq!(object.len(), 2, "unexpected fields in {item}");
        let id = object["id"].as_i64().unwrap();
        assert!(id > last_id);
        last_id = id;
        names.insert(object["name"].as_str().unwrap().to_string());
    }
    let expected: HashSet<String> = SEED_CATEGORIES.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn empty_store_returns_literal_empty_array() {
    let app = app_with_pool(empty_pool().await);

    let response = send(app, Method::GET, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn preflight_skips_storage() {
    let mut store = MockStore::new();
    store.expect_list().never();

    let response = send(app_with_store(store), Method::OPTIONS, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(response.headers());
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn storage_failure_is_plain_text_500() {
    let mut store = MockStore::new();
    store
        .expect_list()
        .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

    let response = send(app_with_store(store), Method::GET, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(response.headers());
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let body = body_string(response).await;
    assert!(!body.trim().is_empty());
    assert!(serde_json::from_str::<Value>(&body).is_err());
}

#[tokio::test]
async fn other_methods_reach_the_listing() {
    let app = app_with_pool(seeded_pool().await);

    let response = send(app, Method::POST, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn root_serves_banner_regardless_of_store() {
    let mut store = MockStore::new();
    store.expect_list().never();
    let app = app_with_store(store);

    let response = send(app.clone(), Method::GET, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, BANNER);

    let response = send(app, Method::DELETE, "/no/such/route").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, BANNER);
}

#[tokio::test]
async fn category_by_id() {
    let pool = seeded_pool().await;
    let id: i64 = sqlx::query_scalar("SELECT id FROM categories WHERE name = 'General'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let app = app_with_pool(pool);

    let response = send(app.clone(), Method::GET, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(response.headers());
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["name"], "General");
    assert_eq!(body["id"], id);

    let response = send(app.clone(), Method::GET, "/api/categories/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors_headers(response.headers());

    let response = send(app, Method::GET, "/api/categories/fiction").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, BANNER);
}

#[tokio::test]
async fn readiness_follows_schema() {
    let response = send(app_with_pool(seeded_pool().await), Method::GET, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bare = library_server::db::open_in_memory().await.unwrap();
    let response = send(app_with_pool(bare), Method::GET, "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn readiness_reports_store_errors_as_unavailable() {
    let mut store = MockStore::new();
    store
        .expect_ready()
        .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

    let response = send(app_with_store(store), Method::GET, "/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn health_and_openapi_document() {
    let app = app_with_pool(empty_pool().await);

    let response = send(app.clone(), Method::GET, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");

    let response = send(app, Method::GET, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["paths"]["/api/categories"].is_object());
}
