//! Category API endpoints

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{error::AppResult, models::Category, AppState};

use super::{encode_json, root};

/// List all categories
///
/// Any method other than `OPTIONS` reaches the query; `OPTIONS` answers the
/// CORS preflight without touching storage.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories ordered by id", body = Vec<Category>),
        (status = 500, description = "Storage failure, raw error text", body = String)
    )
)]
pub async fn list_categories(
    method: Method,
    State(state): State<AppState>,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let categories = state.services.catalog.list_categories().await?;
    if categories.is_empty() {
        return Ok((
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            "[]",
        )
            .into_response());
    }
    Ok(encode_json(&categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "No category with this id", body = String)
    )
)]
pub async fn get_category(
    method: Method,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let Ok(id) = id.parse::<i64>() else {
        return Ok(root::banner().await.into_response());
    };

    let category = state.services.catalog.get_category(id).await?;
    Ok(encode_json(&category))
}
