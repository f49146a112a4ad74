//! Two-pass validation for catalog items.
//!
//! The structural pass checks each field in isolation (presence, length,
//! pattern, numeric range). The business-rule pass checks cross-field
//! invariants on an item that may already be structurally sound. Both
//! passes accumulate every violation instead of failing on the first one,
//! so a response can enumerate everything the client needs to fix.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::item::{
    BRAND_MAX_LEN, CatalogItem, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, PRICE_MAX,
    PRICE_MIN, TYPE_MAX_LEN,
};

static SKU_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("valid sku pattern"));

/// A single field-level validation failure, using wire-format field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Per-field structural checks. Returns every violation found.
pub fn validate_structural(item: &CatalogItem) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_required_text(&mut violations, "name", &item.name, NAME_MAX_LEN);
    check_required_text(
        &mut violations,
        "description",
        &item.description,
        DESCRIPTION_MAX_LEN,
    );
    check_required_text(
        &mut violations,
        "catalogType",
        &item.catalog_type,
        TYPE_MAX_LEN,
    );
    check_required_text(
        &mut violations,
        "catalogBrand",
        &item.catalog_brand,
        BRAND_MAX_LEN,
    );

    match item.sku.as_deref() {
        None | Some("") => {
            violations.push(FieldViolation::new("sku", "sku is required"));
        }
        Some(sku) if !SKU_PATTERN.is_match(sku) => {
            violations.push(FieldViolation::new(
                "sku",
                "sku must match the pattern NNNN-NNNN",
            ));
        }
        Some(_) => {}
    }

    if !(PRICE_MIN..=PRICE_MAX).contains(&item.price) {
        violations.push(FieldViolation::new(
            "price",
            format!("price must be between {PRICE_MIN} and {PRICE_MAX}"),
        ));
    }

    check_non_negative(
        &mut violations,
        "availableStock",
        item.available_stock,
    );
    check_non_negative(
        &mut violations,
        "restockThreshold",
        item.restock_threshold,
    );
    check_non_negative(
        &mut violations,
        "maxStockThreshold",
        item.max_stock_threshold,
    );

    // Zero means unset; the reference seed data leaves it that way.
    if item.restock_amount != 0
        && (item.restock_amount < 0 || item.restock_amount % 10 != 0)
    {
        violations.push(FieldViolation::new(
            "restockAmount",
            "restockAmount must be a positive multiple of ten",
        ));
    }

    violations
}

/// Cross-field business rules, run as a separate pass after the
/// structural checks.
pub fn validate_business_rules(item: &CatalogItem) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if item.catalog_brand == "Gucci" && item.price < 1_000.0 {
        violations.push(FieldViolation::new(
            "price",
            "items branded Gucci must be priced at 1000 or above",
        ));
    }

    if item.max_stock_threshold > 0
        && item.available_stock > item.max_stock_threshold
    {
        violations.push(FieldViolation::new(
            "availableStock",
            "availableStock must not exceed maxStockThreshold",
        ));
    }

    violations
}

/// Runs both validation passes and fails if either reports a violation.
pub fn validate(item: &CatalogItem) -> Result<(), Vec<FieldViolation>> {
    let mut violations = validate_structural(item);
    violations.extend(validate_business_rules(item));
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_required_text(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &str,
    max_len: usize,
) {
    if value.is_empty() {
        violations
            .push(FieldViolation::new(field, format!("{field} is required")));
    } else if value.chars().count() > max_len {
        violations.push(FieldViolation::new(
            field,
            format!("{field} must be at most {max_len} characters"),
        ));
    }
}

fn check_non_negative(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: i64,
) {
    if value < 0 {
        violations.push(FieldViolation::new(
            field,
            format!("{field} must not be negative"),
        ));
    }
}
