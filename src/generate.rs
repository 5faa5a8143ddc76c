//! Static build driver.
//!
//! Loads the stores, builds the content index once and hands that same index
//! to the enumerator and the page loader. Any error aborts the build.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{load_index, ContentError, ContentIndex};
use crate::pages::{load_page, PageError};
use crate::paths;
use crate::routing::{RouteError, RouteTable};
use crate::sitemap::{enumerate_site_urls, render_sitemap_xml};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("Route table error: {0}")]
    Route(#[from] RouteError),
    #[error("Enumerated page {path} has no data: {source}")]
    Page { path: String, source: PageError },
    #[error("Failed to write {0}: {1}")]
    Write(String, String),
    #[error("Failed to serialize {0}: {1}")]
    Serialize(String, String),
}

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generated_at: DateTime<Utc>,
    pub stores: usize,
    pub urls: usize,
    pub pages: usize,
    pub duration_ms: i64,
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    let write_err = |e: std::io::Error| BuildError::Write(path.display().to_string(), e.to_string());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Write the sitemap and page data for an already built index.
pub fn build_site(
    table: &RouteTable,
    index: &ContentIndex,
    config: &SiteConfig,
) -> Result<BuildReport, BuildError> {
    let started = Utc::now();

    let urls = enumerate_site_urls(table, index, &config.base_url)?;

    let mut pages = 0;
    for url in &urls {
        let page = load_page(&url.route, index).map_err(|source| BuildError::Page {
            path: url.path.to_string(),
            source,
        })?;
        let file = paths::page_data_file(&config.out_dir, &url.path);
        let json = serde_json::to_string_pretty(&page)
            .map_err(|e| BuildError::Serialize(url.path.to_string(), e.to_string()))?;
        write_file(&file, &json)?;
        pages += 1;
    }

    let sitemap = render_sitemap_xml(&urls, &config.sitemap_options());
    write_file(&paths::sitemap_file(&config.out_dir), &sitemap)?;

    let finished = Utc::now();
    let report = BuildReport {
        generated_at: finished,
        stores: index.stores().len(),
        urls: urls.len(),
        pages,
        duration_ms: (finished - started).num_milliseconds(),
    };
    tracing::info!(
        "Built {} pages ({} URLs, {} stores) into {} in {}ms",
        report.pages,
        report.urls,
        report.stores,
        config.out_dir.display(),
        report.duration_ms
    );
    Ok(report)
}

/// Run a full build from the configured data directory.
pub fn run(config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let index = load_index(&config.data_dir)?;
    let table = RouteTable::standard()?;
    build_site(&table, &index, config)
}
