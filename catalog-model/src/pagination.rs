//! Pagination input contract and response envelope.

use serde::{Deserialize, Serialize};

use crate::validate::FieldViolation;

/// Page size applied when the client does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Raw pagination parameters as they arrive on the query string.
///
/// Out-of-range values are rejected, not clamped; absent values fall back
/// to the defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub page_index: Option<i64>,
}

/// Validated pagination, safe to hand to the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: i64,
    pub page_index: i64,
}

impl Pagination {
    /// Row offset of the first item on this page. Validation guarantees
    /// the product fits; saturation covers hand-built values.
    pub fn offset(&self) -> i64 {
        self.page_size.saturating_mul(self.page_index)
    }
}

impl PaginationRequest {
    pub fn validate(self) -> Result<Pagination, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            violations.push(FieldViolation::new(
                "pageSize",
                format!("pageSize must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        let page_index = self.page_index.unwrap_or(0);
        if page_index < 0 {
            violations.push(FieldViolation::new(
                "pageIndex",
                "pageIndex must not be negative",
            ));
        } else if page_size.checked_mul(page_index).is_none() {
            // The row offset must stay representable.
            violations.push(FieldViolation::new(
                "pageIndex",
                "pageIndex is too large",
            ));
        }

        if violations.is_empty() {
            Ok(Pagination {
                page_size,
                page_index,
            })
        } else {
            Err(violations)
        }
    }
}

/// Paginated response wrapper: page metadata plus the data slice.
/// `count` is the total number of matches across all pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedItems<T> {
    pub page_index: i64,
    pub page_size: i64,
    pub count: i64,
    pub data: Vec<T>,
}
