//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Language;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,
    pub root: String,

    // Content
    pub articles_dir: String,
    pub public_dir: String,
    /// Catalog file, relative to the base directory
    pub catalog: String,
    pub default_language: Language,
    /// Accept `{slug}-{lang}.md` as well as `{slug}.{lang}.md`
    pub legacy_names: bool,
    /// syntect theme for highlighted code blocks
    pub highlight_theme: String,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            author: String::new(),
            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            articles_dir: "data/articles".to_string(),
            public_dir: "public".to_string(),
            catalog: "articles.yml".to_string(),
            default_language: Language::Ko,
            legacy_names: false,
            highlight_theme: "base16-ocean.dark".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    /// Expose `/api/debug-files`
    pub diagnostics: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
            diagnostics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.articles_dir, "data/articles");
        assert_eq!(config.default_language, Language::Ko);
        assert_eq!(config.server.port, 4000);
        assert!(!config.legacy_names);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Kayoung's Blog
url: https://example.com
default_language: en
legacy_names: true
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Kayoung's Blog");
        assert_eq!(config.default_language, Language::En);
        assert!(config.legacy_names);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.catalog, "articles.yml");
    }
}
