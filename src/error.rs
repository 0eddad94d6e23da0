//! Error types for article resolution and catalog loading

use std::path::PathBuf;
use thiserror::Error;

use crate::content::Language;

/// Diagnostics collected when no markdown file matches a slug
#[derive(Debug, Clone)]
pub struct Missing {
    pub slug: String,
    pub lang: Language,
    /// Every candidate path that was checked, in lookup order
    pub searched_paths: Vec<PathBuf>,
    /// Sorted file names found in the articles directory
    pub existing_files: Vec<String>,
    pub articles_directory: PathBuf,
}

/// Errors raised by the content layer
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("article not found: {} ({})", .0.slug, .0.lang)]
    NotFound(Box<Missing>),

    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("unsupported language: {0:?} (expected \"ko\" or \"en\")")]
    UnsupportedLanguage(String),

    #[error("invalid date {date:?} for article {slug}")]
    InvalidDate { slug: String, date: String },

    #[error("failed to parse front-matter in {path:?}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArticleError {
    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ArticleError::InvalidSlug(_) | ArticleError::UnsupportedLanguage(_)
        )
    }
}

pub type Result<T, E = ArticleError> = std::result::Result<T, E>;
