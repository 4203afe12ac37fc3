//! Catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Category,
    repository::CategoryStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CategoryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List all categories, ascending by id
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.store.list().await
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: i64) -> AppResult<Category> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Whether storage can serve requests
    pub async fn ready(&self) -> bool {
        match self.store.ready().await {
            Ok(ready) => ready,
            Err(e) => {
                tracing::error!("Readiness check failed: {}", e);
                false
            }
        }
    }
}
