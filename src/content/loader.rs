//! Store data loading - reads store records from JSON files.
//!
//! Every `*.json` file in the stores directory holds an array of
//! [`StoreRecord`]s. Files are read in file name order so that the resulting
//! store list (and everything derived from it) is deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use super::store::{Store, StoreRecord};

/// Store loading errors. Any of these aborts the build.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Store directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("IO error reading {0}: {1}")]
    IoError(String, String),
    #[error("Parse error in {0}: {1}")]
    ParseError(String, String),
}

/// JSON files in `dir`, sorted by file name.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| LoadError::IoError(dir.display().to_string(), e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::IoError(dir.display().to_string(), e.to_string()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load the records of one file.
pub fn load_store_file(path: &Path) -> Result<Vec<StoreRecord>, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::IoError(path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&content)
        .map_err(|e| LoadError::ParseError(path.display().to_string(), e.to_string()))
}

/// Load all stores from `dir`, with slugs assigned.
pub fn load_all_stores(dir: &Path) -> Result<Vec<Store>, LoadError> {
    let mut stores = Vec::new();

    for file in json_files(dir)? {
        let records = load_store_file(&file)?;
        tracing::debug!("Loaded {} stores from {}", records.len(), file.display());
        stores.extend(records.into_iter().map(Store::from_record));
    }

    tracing::info!("Loaded {} stores from {}", stores.len(), dir.display());
    Ok(stores)
}
