//! Site configuration.
//!
//! Values are loaded with priority: config.toml > environment (.env) > default.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::sitemap::SitemapOptions;

// ==================== Defaults ====================

pub const DEFAULT_BASE_URL: &str = "https://thrifter.be";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUT_DIR: &str = "build";

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

pub const DEFAULT_CHANGEFREQ: &str = "weekly";
pub const DEFAULT_PRIORITY: f32 = 0.8;

// ==================== config.toml ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    site: Option<FileSiteConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSiteConfig {
    base_url: Option<String>,
    data_dir: Option<String>,
    out_dir: Option<String>,
    port: Option<u16>,
    dev_mode: Option<bool>,
    changefreq: Option<String>,
    priority: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {0}: {1}")]
    Read(String, String),
    #[error("Invalid {0}: {1}")]
    Parse(String, String),
    #[error("Invalid value for {0}: {1:?}")]
    InvalidEnv(&'static str, String),
}

// ==================== Site Configuration ====================

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Absolute site origin, without trailing slash
    pub base_url: String,
    /// Directory holding `stores/*.json`
    pub data_dir: PathBuf,
    /// Build output directory
    pub out_dir: PathBuf,
    pub port: u16,
    /// Enables content reloading on the running server
    pub dev_mode: bool,
    pub changefreq: Option<String>,
    pub priority: Option<f32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            port: SERVER_PORT,
            dev_mode: false,
            changefreq: Some(DEFAULT_CHANGEFREQ.to_string()),
            priority: Some(DEFAULT_PRIORITY),
        }
    }
}

impl SiteConfig {
    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", SERVER_ADDR, self.port)
    }

    pub fn sitemap_options(&self) -> SitemapOptions {
        SitemapOptions {
            changefreq: self.changefreq.clone(),
            priority: self.priority,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Build a configuration from a config file (if it exists) and an environment
/// lookup. File values win over environment values.
pub fn resolve_config(
    config_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SiteConfig, ConfigError> {
    let file = match std::fs::read_to_string(config_file) {
        Ok(contents) => {
            let parsed: FileConfig = toml::from_str(&contents).map_err(|e| {
                ConfigError::Parse(config_file.display().to_string(), e.to_string())
            })?;
            tracing::info!("Using configuration from {}", config_file.display());
            parsed.site.unwrap_or_default()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileSiteConfig::default(),
        Err(e) => {
            return Err(ConfigError::Read(
                config_file.display().to_string(),
                e.to_string(),
            ))
        }
    };

    let defaults = SiteConfig::default();

    let port = match (file.port, env("PORT")) {
        (Some(port), _) => port,
        (None, Some(raw)) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv("PORT", raw.clone()))?,
        (None, None) => defaults.port,
    };

    let dev_mode = match (file.dev_mode, env("DEV_MODE")) {
        (Some(dev), _) => dev,
        (None, Some(raw)) => {
            parse_bool(&raw).ok_or_else(|| ConfigError::InvalidEnv("DEV_MODE", raw.clone()))?
        }
        (None, None) => defaults.dev_mode,
    };

    let base_url = file
        .base_url
        .or_else(|| env("SITE_URL"))
        .unwrap_or(defaults.base_url);

    Ok(SiteConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        data_dir: file
            .data_dir
            .or_else(|| env("DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir),
        out_dir: file
            .out_dir
            .or_else(|| env("OUT_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.out_dir),
        port,
        dev_mode,
        changefreq: file.changefreq.or(defaults.changefreq),
        priority: file.priority.or(defaults.priority),
    })
}

/// Load site configuration from `config.toml` and the process environment.
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = resolve_config(Path::new("config.toml"), |key| std::env::var(key).ok())?;
    tracing::info!(
        "Site {} (data: {}, out: {}, dev mode: {})",
        config.base_url,
        config.data_dir.display(),
        config.out_dir.display(),
        config.dev_mode
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let temp = TempDir::new().unwrap();
        let config = resolve_config(&temp.path().join("config.toml"), env_from(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let env = env_from(&[
            ("SITE_URL", "https://staging.thrifter.be/"),
            ("DATA_DIR", "fixtures"),
            ("PORT", "3001"),
            ("DEV_MODE", "true"),
        ]);
        let config = resolve_config(&temp.path().join("config.toml"), env).unwrap();
        assert_eq!(config.base_url, "https://staging.thrifter.be");
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.port, 3001);
        assert!(config.dev_mode);
    }

    #[test]
    fn test_file_overrides_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[site]
base_url = "https://example.be"
port = 8080
changefreq = "daily"
"#,
        )
        .unwrap();

        let env = env_from(&[("SITE_URL", "https://ignored.be"), ("PORT", "3001")]);
        let config = resolve_config(&path, env).unwrap();
        assert_eq!(config.base_url, "https://example.be");
        assert_eq!(config.port, 8080);
        assert_eq!(config.changefreq.as_deref(), Some("daily"));
        assert_eq!(config.priority, Some(DEFAULT_PRIORITY));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[site\nport = ").unwrap();
        assert!(matches!(
            resolve_config(&path, env_from(&[])),
            Err(ConfigError::Parse(_, _))
        ));
    }

    #[test]
    fn test_invalid_env_port() {
        let temp = TempDir::new().unwrap();
        let result = resolve_config(&temp.path().join("config.toml"), env_from(&[("PORT", "abc")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnv("PORT", _))));
    }
}
