//! Repository layer for database operations

pub mod categories;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{error::AppResult, models::Category};

/// Read access to category records.
///
/// Handlers only see this trait, so a store other than SQLite can be injected
/// through [`crate::services::Services::with_store`].
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ascending by id
    async fn list(&self) -> AppResult<Vec<Category>>;

    /// Category by id, `None` when absent
    async fn get(&self, id: i64) -> AppResult<Option<Category>>;

    /// Whether the store is reachable and carries the full schema
    async fn ready(&self) -> AppResult<bool>;
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub categories: categories::CategoriesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            categories: categories::CategoriesRepository::new(pool.clone()),
            pool,
        }
    }
}
