//! folio: bilingual markdown article service
//!
//! Serves the articles of a portfolio site from flat `{slug}.{lang}.md`
//! files, filtered through a static catalog, over a small JSON API.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod seo;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ArticleResolver, Catalog};

/// Config file looked up in the base directory
pub const CONFIG_FILE: &str = "folio.yml";

/// The main application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown article directory
    pub articles_dir: PathBuf,
    /// Static asset directory
    pub public_dir: PathBuf,
    /// Catalog file
    pub catalog_path: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let articles_dir = base_dir.join(&config.articles_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let catalog_path = base_dir.join(&config.catalog);

        Self {
            config,
            base_dir,
            articles_dir,
            public_dir,
            catalog_path,
        }
    }

    /// Resolver over the configured articles directory
    pub fn resolver(&self) -> ArticleResolver {
        ArticleResolver::new(&self.articles_dir).with_legacy_names(self.config.legacy_names)
    }

    /// Load the article catalog
    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::load(&self.catalog_path)?)
    }
}
