//! Application state shared by all handlers.

use std::sync::{Arc, RwLock};

use crate::config::SiteConfig;
use crate::content::{load_index, ContentError, ContentIndex};
use crate::routing::RouteTable;

/// The content index computed at start-up.
///
/// Readers clone the inner `Arc` and work on a snapshot; a reload swaps the
/// pointer.
#[derive(Clone)]
pub struct IndexHandle {
    inner: Arc<RwLock<Arc<ContentIndex>>>,
}

impl IndexHandle {
    pub fn new(index: ContentIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Current snapshot.
    pub fn get(&self) -> Arc<ContentIndex> {
        // A panicked writer cannot leave a half-swapped Arc behind.
        let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    pub fn replace(&self, index: ContentIndex) {
        let index = Arc::new(index);
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = index;
    }
}

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub routes: Arc<RouteTable>,
    pub index: IndexHandle,
}

impl AppState {
    pub fn new(config: SiteConfig, routes: RouteTable, index: ContentIndex) -> Self {
        Self {
            config: Arc::new(config),
            routes: Arc::new(routes),
            index: IndexHandle::new(index),
        }
    }

    /// Rebuild the index from disk. Only used in dev mode.
    ///
    /// On error the previous index stays in place.
    pub fn reload_index(&self) -> Result<usize, ContentError> {
        let index = load_index(&self.config.data_dir)?;
        let stores = index.stores().len();
        self.index.replace(index);
        tracing::info!("Reloaded content index ({} stores)", stores);
        Ok(stores)
    }
}
