//! Categories repository

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::CategoryStore;
use crate::{db, error::AppResult, models::Category};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: SqlitePool,
}

impl CategoriesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoriesRepository {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ready(&self) -> AppResult<bool> {
        for table in db::schema::TABLES {
            if !db::table_exists(&self.pool, table).await? {
                tracing::warn!("Table {} is missing", table);
                return Ok(false);
            }
        }
        Ok(true)
    }
}
