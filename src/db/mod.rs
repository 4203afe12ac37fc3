//! Storage initializer: opens the SQLite store, ensures the schema and seeds categories.
//!
//! Every statement is idempotent on its own, so initialization runs on each start
//! without a transaction and never duplicates rows.

pub mod schema;

use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::{config::DatabaseConfig, error::AppResult, models::SEED_CATEGORIES};

/// Outcome of an initialization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Categories newly inserted by this run (0 when the store was already seeded)
    pub inserted: u64,
}

/// Open (or create) the file-backed store described by `config`
pub async fn open(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Opened store at {}", config.path);
    Ok(pool)
}

/// Open a private in-memory store.
///
/// The pool holds a single connection that never expires, since each SQLite
/// in-memory connection is its own database.
pub async fn open_in_memory() -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Ensure both tables exist and every seed category is present
pub async fn initialize(pool: &SqlitePool) -> AppResult<SeedReport> {
    ensure_schema(pool).await?;
    let report = seed_categories(pool).await?;
    tracing::info!("Store initialized, {} categories inserted", report.inserted);
    Ok(report)
}

/// Create the `categories` and `books` tables when absent
pub async fn ensure_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(schema::CREATE_CATEGORIES).execute(pool).await?;
    sqlx::query(schema::CREATE_BOOKS).execute(pool).await?;
    tracing::debug!("Schema ensured");
    Ok(())
}

/// Insert each seed category unless a row with that name already exists
pub async fn seed_categories(pool: &SqlitePool) -> AppResult<SeedReport> {
    let mut inserted = 0;
    for name in SEED_CATEGORIES {
        let result = sqlx::query(schema::INSERT_CATEGORY_IF_ABSENT)
            .bind(name)
            .execute(pool)
            .await?;
        inserted += result.rows_affected();
    }
    Ok(SeedReport { inserted })
}

/// Whether a table named `name` exists in the store
pub async fn table_exists(pool: &SqlitePool, name: &str) -> AppResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(name)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}
