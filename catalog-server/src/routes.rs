use axum::{Router, routing::get};

use crate::{AppState, handlers::items, handlers::pics};

/// Wire all catalog endpoints onto a router.
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/catalog", catalog_routes())
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(items::list_items_handler).post(items::create_item_handler),
        )
        .route("/items/by", get(items::get_items_by_ids_handler))
        .route(
            "/items/{id}",
            get(items::get_item_handler)
                .put(items::replace_item_handler)
                .patch(items::patch_item_handler)
                .delete(items::delete_item_handler),
        )
        .route("/items/{id}/pic", get(pics::get_item_picture_handler))
}
