use serde::{Deserialize, Serialize};

/// Maximum length of an item name.
pub const NAME_MAX_LEN: usize = 50;
/// Maximum length of an item description.
pub const DESCRIPTION_MAX_LEN: usize = 500;
/// Maximum length of a catalog type label.
pub const TYPE_MAX_LEN: usize = 100;
/// Maximum length of a catalog brand label.
pub const BRAND_MAX_LEN: usize = 100;
/// Inclusive price bounds accepted by validation.
pub const PRICE_MIN: f64 = 0.01;
/// Upper price bound, inclusive.
pub const PRICE_MAX: f64 = 10_000.0;

/// A product record managed by the catalog service.
///
/// Required fields carry serde defaults so that an incomplete payload
/// deserializes and every missing field is reported by validation in one
/// pass instead of the first one aborting deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Caller-assigned identifier, unique across the catalog.
    pub id: i64,
    /// Product name. Required, indexed for prefix search.
    #[serde(default)]
    pub name: String,
    /// Detailed product description. Required.
    #[serde(default)]
    pub description: String,
    /// Stock keeping unit, pattern `NNNN-NNNN`. Nullable in the store
    /// (seed fixtures may omit it) but required on create and update.
    #[serde(default)]
    pub sku: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: f64,
    /// Filename of the product image, derived as `{id}.webp` at seed time.
    #[serde(default)]
    pub picture_file_name: Option<String>,
    /// Category of the product.
    #[serde(default)]
    pub catalog_type: String,
    /// Brand of the product.
    #[serde(default)]
    pub catalog_brand: String,
    /// Quantity currently in stock.
    #[serde(default)]
    pub available_stock: i64,
    /// Stock level at which a reorder should be triggered.
    #[serde(default)]
    pub restock_threshold: i64,
    /// Units ordered when restocking. Zero means unset; any other value
    /// must be a positive multiple of ten.
    #[serde(default)]
    pub restock_amount: i64,
    /// Maximum units that can be in stock at any time.
    #[serde(default)]
    pub max_stock_threshold: i64,
    /// Whether the item is currently being restocked.
    #[serde(default)]
    pub on_reorder: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id": 7, "name": "Wool Scarf"}"#)
                .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Wool Scarf");
        assert!(item.description.is_empty());
        assert_eq!(item.sku, None);
        assert_eq!(item.price, 0.0);
        assert!(!item.on_reorder);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let item = CatalogItem {
            id: 1,
            name: "Belt".into(),
            description: "Leather belt".into(),
            sku: Some("1234-5678".into()),
            price: 59.0,
            picture_file_name: Some("1.webp".into()),
            catalog_type: "Accessories".into(),
            catalog_brand: "Generic".into(),
            available_stock: 10,
            restock_threshold: 2,
            restock_amount: 10,
            max_stock_threshold: 50,
            on_reorder: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["pictureFileName"], "1.webp");
        assert_eq!(json["catalogBrand"], "Generic");
        assert_eq!(json["availableStock"], 10);
        assert_eq!(json["onReorder"], false);
    }
}
