//! HTTP layer: router, handlers and the JSON response encoder

pub mod categories;
pub mod health;
pub mod openapi;
pub mod root;

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        HeaderValue,
    },
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{error::AppError, AppState};

/// Build the application router.
///
/// Category routes accept every method and carry permissive CORS headers on
/// every response, errors included. Anything not routed gets the banner.
pub fn router(state: AppState) -> Router {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    let categories: Router<AppState> = Router::new()
        .route("/api/categories", any(categories::list_categories))
        .route("/api/categories/:id", any(categories::get_category))
        .layer(cors);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(categories)
        .fallback(root::banner)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serialize `value` as a JSON response body.
///
/// The body is fully encoded before the response is built, so an encoding
/// failure becomes a clean 500 carrying the error text.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(mut body) => {
            body.push(b'\n');
            ([(CONTENT_TYPE, HeaderValue::from_static("application/json"))], body).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
