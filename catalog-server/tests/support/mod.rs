use std::{path::PathBuf, sync::Arc};

use axum_test::TestServer;
use catalog_server::{
    AppState, config::Config, create_app, store::SqliteCatalogStore,
};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

pub struct TestApp {
    pub server: TestServer,
}

/// A fresh store on a single-connection in-memory database. One
/// connection keeps every query on the same memory instance.
pub async fn memory_store() -> SqliteCatalogStore {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    let store = SqliteCatalogStore::new(pool);
    store.migrate().await.expect("apply migrations");
    store
}

pub async fn spawn_app_with_root(content_root: PathBuf) -> TestApp {
    let state = AppState {
        store: Arc::new(memory_store().await),
        config: Arc::new(Config {
            host: "127.0.0.1".into(),
            port: 0,
            database_url: "sqlite::memory:".into(),
            content_root,
        }),
    };
    let server = TestServer::new(create_app(state)).expect("test server");
    TestApp { server }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_root(std::env::temp_dir()).await
}

/// A payload that passes both validation passes.
pub fn item_payload(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "sku": format!("{:04}-{:04}", id, id),
        "price": 59.99,
        "pictureFileName": format!("{id}.webp"),
        "catalogType": "Bags",
        "catalogBrand": "Contoso",
        "availableStock": 10,
        "restockThreshold": 2,
        "restockAmount": 10,
        "maxStockThreshold": 50,
        "onReorder": false
    })
}
