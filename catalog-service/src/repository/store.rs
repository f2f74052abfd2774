//! Catalog store trait and PostgreSQL implementation
//!
//! The trait is the seam between request handling and the external store.
//! Handlers only see [`CatalogStore`]; production wires in
//! [`PgCatalogStore`], tests an in-memory stand-in. Methods use RPITIT
//! (Return Position Impl Trait In Traits), available since Rust 1.75.

use std::future::Future;

use sqlx::PgPool;

use super::column::SearchColumn;
use super::error::{StoreError, StoreOperation, StoreResult};
use super::pagination::Pagination;
use super::sql;
use crate::models::Product;

/// Read-only access to the product catalog
///
/// Count and page queries for the same mode share one predicate, but they
/// are separate round-trips: if the store mutates between them, `count` and
/// the returned rows can disagree. That gap is accepted, not papered over.
pub trait CatalogStore: Send + Sync {
    /// Count every row in the catalog
    fn count(&self) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Fetch one page of the catalog, ordered by ascending id
    fn list(&self, page: Pagination) -> impl Future<Output = StoreResult<Vec<Product>>> + Send;

    /// Count rows whose `column` matches the LIKE `pattern`
    fn count_matching(
        &self,
        column: SearchColumn,
        pattern: &str,
    ) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Fetch one page of rows whose `column` matches the LIKE `pattern`,
    /// ordered by ascending id
    fn search(
        &self,
        column: SearchColumn,
        pattern: &str,
        page: Pagination,
    ) -> impl Future<Output = StoreResult<Vec<Product>>> + Send;
}

/// PostgreSQL-backed catalog store
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl CatalogStore for PgCatalogStore {
    async fn count(&self) -> StoreResult<u64> {
        let total: i64 = sqlx::query_scalar(sql::LIST_COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx(StoreOperation::Count, e))?;

        Ok(total.max(0) as u64)
    }

    async fn list(&self, page: Pagination) -> StoreResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(sql::LIST_SELECT)
            .bind(page.limit as i64)
            .bind(page.offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx(StoreOperation::Select, e))
    }

    async fn count_matching(&self, column: SearchColumn, pattern: &str) -> StoreResult<u64> {
        let total: i64 = sqlx::query_scalar(sql::search_count(column))
            .bind(pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                StoreError::from_sqlx(StoreOperation::Count, e)
                    .with_context(format!("column: {column}"))
            })?;

        Ok(total.max(0) as u64)
    }

    async fn search(
        &self,
        column: SearchColumn,
        pattern: &str,
        page: Pagination,
    ) -> StoreResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(sql::search_select(column))
            .bind(pattern)
            .bind(page.limit as i64)
            .bind(page.offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                StoreError::from_sqlx(StoreOperation::Select, e)
                    .with_context(format!("column: {column}"))
            })
    }
}
