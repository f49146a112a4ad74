//! Core data model definitions shared across catalog crates.

pub mod item;
pub mod pagination;
pub mod seed;
pub mod validate;

// Intentionally curated re-exports for downstream consumers.
pub use item::CatalogItem;
pub use pagination::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PaginatedItems, Pagination,
    PaginationRequest,
};
pub use seed::CatalogSourceEntry;
pub use validate::{
    FieldViolation, validate, validate_business_rules, validate_structural,
};
