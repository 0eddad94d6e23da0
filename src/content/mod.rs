//! Content module - article files, catalog and rendering

mod article;
pub mod catalog;
mod frontmatter;
pub mod inventory;
mod language;
mod markdown;
pub mod resolver;

pub use article::{
    ArticleConfig, ArticleDetail, ArticleSummary, ResolvedArticle, DEFAULT_READ_TIME, UNTITLED,
};
pub use catalog::{Catalog, ListOptions};
pub use frontmatter::FrontMatter;
pub use language::{Language, Localized};
pub use markdown::MarkdownRenderer;
pub use resolver::ArticleResolver;
