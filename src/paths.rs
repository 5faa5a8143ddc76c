//! Project path functions - single source of truth for all file paths.
//!
//! ## Layout
//!
//! - `{data_dir}/stores/*.json`: store records
//! - `{out_dir}/sitemap.xml`: generated sitemap
//! - `{out_dir}/{localized path}/index.json`: generated page data
//!
//! `data_dir` and `out_dir` come from [`crate::config::SiteConfig`].

use std::path::{Path, PathBuf};

use crate::routing::LocalizedPath;

/// Store records directory
pub fn stores_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("stores")
}

/// Generated sitemap file
pub fn sitemap_file(out_dir: &Path) -> PathBuf {
    out_dir.join("sitemap.xml")
}

/// Page data file for a localized page (`/fr/villes` -> `{out_dir}/fr/villes/index.json`)
pub fn page_data_file(out_dir: &Path, path: &LocalizedPath) -> PathBuf {
    let mut file = out_dir.to_path_buf();
    for segment in path.as_str().split('/').filter(|s| !s.is_empty()) {
        file.push(segment);
    }
    file.join("index.json")
}

// ==================== Tests ====================
