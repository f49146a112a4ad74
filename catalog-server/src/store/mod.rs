//! Store access for catalog items.
//!
//! Handlers depend on the [`CatalogStore`] trait and receive a concrete
//! implementation at startup; nothing resolves a store handle from request
//! context.

pub mod sqlite;

pub use sqlite::SqliteCatalogStore;

use async_trait::async_trait;
use catalog_model::{CatalogItem, Pagination};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Conjunctive filters applied by the list operation.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Prefix match on the item name, database-default collation.
    pub name_prefix: Option<String>,
    /// Exact match on the catalog type.
    pub catalog_type: Option<String>,
    /// Exact match on the catalog brand.
    pub catalog_brand: Option<String>,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns one page of matching items ordered by name ascending,
    /// together with the total match count independent of paging.
    async fn list(
        &self,
        filter: ItemFilter,
        page: Pagination,
    ) -> Result<(Vec<CatalogItem>, i64)>;

    async fn get(&self, id: i64) -> Result<Option<CatalogItem>>;

    /// Fetches all existing items among `ids`; missing ids are omitted.
    async fn get_many(&self, ids: &[i64]) -> Result<Vec<CatalogItem>>;

    /// Inserts a new row. An id collision surfaces as
    /// [`StoreError::Conflict`], never as a silent overwrite.
    async fn insert(&self, item: &CatalogItem) -> Result<()>;

    /// Inserts all rows in a single transaction.
    async fn insert_batch(&self, items: &[CatalogItem]) -> Result<()>;

    /// Full-row update. Returns false when no row matched the id.
    async fn update(&self, item: &CatalogItem) -> Result<bool>;

    /// Hard delete. Returns false when no row matched the id.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}
