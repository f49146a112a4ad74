//! One-shot JSON seeding of an empty catalog.

use std::path::Path;

use anyhow::Context;
use catalog_model::CatalogSourceEntry;
use tracing::{debug, error, info};

use crate::store::CatalogStore;

/// Populates an empty store from `<content_root>/data/catalog.json` and
/// returns the number of rows inserted. A store that already contains
/// rows is left untouched.
pub async fn seed_catalog(
    store: &dyn CatalogStore,
    content_root: &Path,
) -> anyhow::Result<usize> {
    if store.count().await? > 0 {
        debug!("catalog already populated, skipping seed");
        return Ok(0);
    }

    let source_path = content_root.join("data").join("catalog.json");
    let source_json = tokio::fs::read_to_string(&source_path)
        .await
        .with_context(|| {
            format!("failed to read seed fixture {}", source_path.display())
        })?;
    let entries: Vec<CatalogSourceEntry> =
        serde_json::from_str(&source_json)
            .context("failed to parse seed fixture")?;

    let items: Vec<_> = entries
        .into_iter()
        .map(CatalogSourceEntry::into_item)
        .collect();
    store.insert_batch(&items).await?;

    info!(count = items.len(), "seeded catalog");
    Ok(items.len())
}

/// Startup policy: a seeding failure is logged and the service keeps
/// running with whatever the store holds.
pub async fn seed_best_effort(store: &dyn CatalogStore, content_root: &Path) {
    if let Err(e) = seed_catalog(store, content_root).await {
        error!(error = %e, "catalog seeding failed, continuing without seed data");
    }
}
