use std::str::FromStr;

use async_trait::async_trait;
use catalog_model::{CatalogItem, Pagination};
use sqlx::{
    QueryBuilder, Row, Sqlite, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};

use super::{CatalogStore, ItemFilter, Result, StoreError};

const ITEM_COLUMNS: &str = "id, name, description, sku, price, \
     picture_file_name, catalog_type, catalog_brand, available_stock, \
     restock_threshold, restock_amount, max_stock_threshold, on_reorder";

const INSERT_SQL: &str = "INSERT INTO catalog_items (id, name, description, \
     sku, price, picture_file_name, catalog_type, catalog_brand, \
     available_stock, restock_threshold, restock_amount, \
     max_stock_threshold, on_reorder) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

const UPDATE_SQL: &str = "UPDATE catalog_items SET name = ?, \
     description = ?, sku = ?, price = ?, picture_file_name = ?, \
     catalog_type = ?, catalog_brand = ?, available_stock = ?, \
     restock_threshold = ?, restock_amount = ?, max_stock_threshold = ?, \
     on_reorder = ? WHERE id = ?";

type SqliteQuery<'q> =
    sqlx::query::Query<'q, Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// SQLite-backed catalog store over a connection pool.
#[derive(Clone, Debug)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let options =
            SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Escapes LIKE metacharacters so a filter value only ever matches
    /// literally.
    fn escape_like(raw: &str) -> String {
        let mut escaped = String::with_capacity(raw.len());
        for c in raw.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    fn apply_filter(builder: &mut QueryBuilder<Sqlite>, filter: &ItemFilter) {
        if let Some(prefix) = &filter.name_prefix {
            builder.push(" AND name LIKE ");
            builder.push_bind(format!("{}%", Self::escape_like(prefix)));
            builder.push(" ESCAPE '\\'");
        }

        if let Some(catalog_type) = &filter.catalog_type {
            builder.push(" AND catalog_type = ");
            builder.push_bind(catalog_type.clone());
        }

        if let Some(catalog_brand) = &filter.catalog_brand {
            builder.push(" AND catalog_brand = ");
            builder.push_bind(catalog_brand.clone());
        }
    }

    fn hydrate_item(row: &SqliteRow) -> Result<CatalogItem> {
        Ok(CatalogItem {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            sku: row.try_get("sku")?,
            price: row.try_get("price")?,
            picture_file_name: row.try_get("picture_file_name")?,
            catalog_type: row.try_get("catalog_type")?,
            catalog_brand: row.try_get("catalog_brand")?,
            available_stock: row.try_get("available_stock")?,
            restock_threshold: row.try_get("restock_threshold")?,
            restock_amount: row.try_get("restock_amount")?,
            max_stock_threshold: row.try_get("max_stock_threshold")?,
            on_reorder: row.try_get("on_reorder")?,
        })
    }

    /// Binds the non-id columns in table order.
    fn bind_fields<'q>(
        query: SqliteQuery<'q>,
        item: &'q CatalogItem,
    ) -> SqliteQuery<'q> {
        query
            .bind(&item.name)
            .bind(&item.description)
            .bind(&item.sku)
            .bind(item.price)
            .bind(&item.picture_file_name)
            .bind(&item.catalog_type)
            .bind(&item.catalog_brand)
            .bind(item.available_stock)
            .bind(item.restock_threshold)
            .bind(item.restock_amount)
            .bind(item.max_stock_threshold)
            .bind(item.on_reorder)
    }

    fn classify_insert_error(id: i64, err: sqlx::Error) -> StoreError {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::UniqueViolation
            ) {
                return StoreError::Conflict(format!(
                    "catalog item {id} already exists"
                ));
            }
        }
        err.into()
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn list(
        &self,
        filter: ItemFilter,
        page: Pagination,
    ) -> Result<(Vec<CatalogItem>, i64)> {
        let mut count_builder = QueryBuilder::<Sqlite>::new(
            "SELECT COUNT(*) AS count FROM catalog_items WHERE 1=1",
        );
        Self::apply_filter(&mut count_builder, &filter);
        let total: i64 = count_builder
            .build()
            .fetch_one(&self.pool)
            .await?
            .try_get("count")?;

        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {ITEM_COLUMNS} FROM catalog_items WHERE 1=1"
        ));
        Self::apply_filter(&mut builder, &filter);
        builder.push(" ORDER BY name ASC, id ASC");
        builder.push(" LIMIT ");
        builder.push_bind(page.page_size);
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder.build().fetch_all(&self.pool).await?;
        let items = rows
            .iter()
            .map(Self::hydrate_item)
            .collect::<Result<Vec<_>>>()?;

        Ok((items, total))
    }

    async fn get(&self, id: i64) -> Result<Option<CatalogItem>> {
        let row = sqlx::query(&format!(
            "SELECT {ITEM_COLUMNS} FROM catalog_items WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::hydrate_item).transpose()
    }

    async fn get_many(&self, ids: &[i64]) -> Result<Vec<CatalogItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {ITEM_COLUMNS} FROM catalog_items WHERE id IN ("
        ));
        {
            let mut separated = builder.separated(", ");
            for id in ids {
                separated.push_bind(*id);
            }
        }
        builder.push(") ORDER BY id ASC");

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(Self::hydrate_item).collect()
    }

    async fn insert(&self, item: &CatalogItem) -> Result<()> {
        Self::bind_fields(sqlx::query(INSERT_SQL).bind(item.id), item)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::classify_insert_error(item.id, e))?;
        Ok(())
    }

    async fn insert_batch(&self, items: &[CatalogItem]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for item in items {
            Self::bind_fields(sqlx::query(INSERT_SQL).bind(item.id), item)
                .execute(&mut *tx)
                .await
                .map_err(|e| Self::classify_insert_error(item.id, e))?;
        }
        tx.commit().await?;

        tracing::debug!(count = items.len(), "batch inserted catalog items");
        Ok(())
    }

    async fn update(&self, item: &CatalogItem) -> Result<bool> {
        let result = Self::bind_fields(sqlx::query(UPDATE_SQL), item)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM catalog_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM catalog_items")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
