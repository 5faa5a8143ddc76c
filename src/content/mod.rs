//! Store content: records, the category catalog and the content index.
//!
//! # Data Location
//!
//! - Store records: `{data_dir}/stores/*.json` (arrays of [`StoreRecord`])
//!
//! # Lifecycle
//!
//! 1. **Load**: read every store file ([`load_all_stores`])
//! 2. **Index**: group stores once ([`ContentIndex::build`])
//! 3. **Share**: the index is handed to the enumerator, the page loader and
//!    the server; nothing recomputes the grouping afterwards

pub mod categories;
pub mod index;
pub mod loader;
pub mod store;

pub use categories::{all_categories, category_by_slug, store_matches_category, CategoryConfig};
pub use index::{CategorySummary, City, ContentIndex, IndexError, Province};
pub use loader::{load_all_stores, load_store_file, LoadError};
pub use store::{Store, StoreRecord};

use std::path::Path;

/// Load the stores under `data_dir` and build the index.
pub fn load_index(data_dir: &Path) -> Result<ContentIndex, ContentError> {
    let stores = load_all_stores(&crate::paths::stores_dir(data_dir))?;
    Ok(ContentIndex::build(stores)?)
}

/// Anything that prevents the content index from being built.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Index(#[from] IndexError),
}
