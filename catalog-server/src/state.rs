use std::{fmt, sync::Arc};

use crate::{config::Config, store::CatalogStore};

/// Shared application state: the store handle and resolved configuration,
/// injected once at startup and passed explicitly to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
