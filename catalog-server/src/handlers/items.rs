use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use catalog_model::{CatalogItem, PaginatedItems, PaginationRequest, validate};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    AppState,
    errors::{AppError, AppResult},
    store::ItemFilter,
};

/// Optional list filters, combined conjunctively.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub brand: Option<String>,
}

/// Comma-separated id list for the batch-get endpoint.
#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    #[serde(default)]
    pub ids: String,
}

pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(filters): Query<ListItemsQuery>,
    Query(pagination): Query<PaginationRequest>,
) -> AppResult<Json<PaginatedItems<CatalogItem>>> {
    let page = pagination.validate().map_err(|violations| {
        AppError::validation("invalid pagination parameters", violations)
    })?;

    let filter = ItemFilter {
        name_prefix: filters.name,
        catalog_type: filters.item_type,
        catalog_brand: filters.brand,
    };

    let (items, count) = state.store.list(filter, page).await?;
    debug!(count, page_index = page.page_index, "listed catalog items");

    Ok(Json(PaginatedItems {
        page_index: page.page_index,
        page_size: page.page_size,
        count,
        data: items,
    }))
}

pub async fn get_items_by_ids_handler(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let ids = parse_id_list(&query.ids)?;
    let items = state.store.get_many(&ids).await?;
    Ok(Json(items))
}

pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CatalogItem>> {
    if id <= 0 {
        return Err(AppError::bad_request("id is not valid"));
    }

    match state.store.get(id).await? {
        Some(item) => Ok(Json(item)),
        None => {
            Err(AppError::not_found(format!("item with id {id} not found")))
        }
    }
}

pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(item): Json<CatalogItem>,
) -> AppResult<Response> {
    validate(&item).map_err(|violations| {
        AppError::validation("item failed validation", violations)
    })?;

    state.store.insert(&item).await?;
    info!(id = item.id, "created catalog item");

    let location = format!("/catalog/items/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)])
        .into_response())
}

/// Full replacement: every mutable field is overwritten from the payload;
/// the id in the path wins over any id in the body.
pub async fn replace_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CatalogItem>,
) -> AppResult<Json<CatalogItem>> {
    if id <= 0 {
        return Err(AppError::bad_request("id is not valid"));
    }

    let item = CatalogItem { id, ..payload };
    validate(&item).map_err(|violations| {
        AppError::validation("item failed validation", violations)
    })?;

    if !state.store.update(&item).await? {
        return Err(AppError::not_found(format!(
            "item with id {id} not found"
        )));
    }

    info!(id, "replaced catalog item");
    Ok(Json(item))
}

/// A single tagged field edit carried in a PATCH body.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Name(String),
    Description(String),
    Sku(String),
    Price(f64),
    PictureFileName(Option<String>),
    CatalogType(String),
    CatalogBrand(String),
    AvailableStock(i64),
    RestockThreshold(i64),
    RestockAmount(i64),
    MaxStockThreshold(i64),
    OnReorder(bool),
}

impl ItemEdit {
    fn apply(&self, item: &mut CatalogItem) {
        match self {
            ItemEdit::Name(v) => item.name = v.clone(),
            ItemEdit::Description(v) => item.description = v.clone(),
            ItemEdit::Sku(v) => item.sku = Some(v.clone()),
            ItemEdit::Price(v) => item.price = *v,
            ItemEdit::PictureFileName(v) => {
                item.picture_file_name = v.clone()
            }
            ItemEdit::CatalogType(v) => item.catalog_type = v.clone(),
            ItemEdit::CatalogBrand(v) => item.catalog_brand = v.clone(),
            ItemEdit::AvailableStock(v) => item.available_stock = *v,
            ItemEdit::RestockThreshold(v) => item.restock_threshold = *v,
            ItemEdit::RestockAmount(v) => item.restock_amount = *v,
            ItemEdit::MaxStockThreshold(v) => item.max_stock_threshold = *v,
            ItemEdit::OnReorder(v) => item.on_reorder = *v,
        }
    }
}

/// Partial patch: edits are applied to a scratch copy, the result is
/// validated as a whole, and nothing is persisted when any violation is
/// found. All failures are reported together.
pub async fn patch_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(edits): Json<Vec<ItemEdit>>,
) -> AppResult<Json<CatalogItem>> {
    if id <= 0 {
        return Err(AppError::bad_request("id is not valid"));
    }

    let Some(mut item) = state.store.get(id).await? else {
        return Err(AppError::not_found(format!(
            "item with id {id} not found"
        )));
    };

    for edit in &edits {
        edit.apply(&mut item);
    }

    validate(&item).map_err(|violations| {
        AppError::validation("patch failed validation", violations)
    })?;

    if !state.store.update(&item).await? {
        return Err(AppError::not_found(format!(
            "item with id {id} not found"
        )));
    }

    info!(id, edits = edits.len(), "patched catalog item");
    Ok(Json(item))
}

pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if id <= 0 {
        return Err(AppError::bad_request("id is not valid"));
    }

    if state.store.delete(id).await? {
        info!(id, "deleted catalog item");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("item with id {id} not found")))
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<i64>, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::bad_request("at least one id is required"));
    }

    raw.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<i64>().map_err(|_| {
                AppError::bad_request(format!(
                    "invalid id `{part}` in id list"
                ))
            })
        })
        .collect()
}
