//! Seed fixture contract: the shape of entries in the bundled
//! `catalog.json` and their expansion into full catalog items.

use serde::Deserialize;

use crate::item::CatalogItem;

/// Stock assigned to every seeded item.
pub const SEED_AVAILABLE_STOCK: i64 = 100;
/// Reorder trigger point for seeded items.
pub const SEED_RESTOCK_THRESHOLD: i64 = 10;
/// Warehouse ceiling for seeded items.
pub const SEED_MAX_STOCK_THRESHOLD: i64 = 200;
/// Units ordered per restock for seeded items.
pub const SEED_RESTOCK_AMOUNT: i64 = 50;

/// One entry of the bundled seed fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSourceEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub brand: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub sku: Option<String>,
}

impl CatalogSourceEntry {
    /// Expands a fixture entry into a full item: inventory defaults are
    /// filled in and the picture filename is derived from the id.
    pub fn into_item(self) -> CatalogItem {
        CatalogItem {
            picture_file_name: Some(format!("{}.webp", self.id)),
            id: self.id,
            name: self.name,
            description: self.description,
            sku: self.sku,
            price: self.price,
            catalog_type: self.item_type,
            catalog_brand: self.brand,
            available_stock: SEED_AVAILABLE_STOCK,
            restock_threshold: SEED_RESTOCK_THRESHOLD,
            restock_amount: SEED_RESTOCK_AMOUNT,
            max_stock_threshold: SEED_MAX_STOCK_THRESHOLD,
            on_reorder: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_expands_with_inventory_defaults_and_picture_name() {
        let entry: CatalogSourceEntry = serde_json::from_str(
            r#"{"id": 1, "type": "Bags", "brand": "Prada",
                "name": "A", "description": "A bag", "price": 9.99}"#,
        )
        .unwrap();

        let item = entry.into_item();
        assert_eq!(item.id, 1);
        assert_eq!(item.picture_file_name.as_deref(), Some("1.webp"));
        assert_eq!(item.available_stock, SEED_AVAILABLE_STOCK);
        assert_eq!(item.restock_threshold, SEED_RESTOCK_THRESHOLD);
        assert_eq!(item.max_stock_threshold, SEED_MAX_STOCK_THRESHOLD);
        assert_eq!(item.restock_amount, SEED_RESTOCK_AMOUNT);
        assert_eq!(item.sku, None);
        assert_eq!(item.price, 9.99);
        assert!(!item.on_reorder);
    }

    #[test]
    fn entry_keeps_an_explicit_sku() {
        let entry: CatalogSourceEntry = serde_json::from_str(
            r#"{"id": 2, "type": "Shoes", "brand": "Gucci",
                "name": "B", "description": "Shoes", "price": 1200.0,
                "sku": "2000-0002"}"#,
        )
        .unwrap();
        assert_eq!(entry.into_item().sku.as_deref(), Some("2000-0002"));
    }
}
