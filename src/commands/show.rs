//! Print a resolved article

use anyhow::Result;

use crate::content::{Language, MarkdownRenderer};
use crate::Folio;

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Metadata header followed by the markdown body
    #[default]
    Text,
    /// Metadata header followed by rendered HTML
    Html,
    /// The API detail payload
    Json,
}

pub fn run(folio: &Folio, slug: &str, lang: Option<Language>, format: Format) -> Result<()> {
    let catalog = folio.catalog()?;
    let lang = lang.unwrap_or(folio.config.default_language);

    let resolved = folio.resolver().resolve(slug, lang, catalog.get(slug))?;

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let article = &resolved.article;
    println!("{} [{}]", article.title, article.lang);
    if article.fallback {
        println!("(no {} file, showing {})", article.requested_lang, article.lang);
    }
    if !article.description.is_empty() {
        println!("{}", article.description);
    }
    println!(
        "{} | {} min | tags: {}",
        article.date,
        article.read_time,
        article.tags.join(", ")
    );
    println!();

    if format == Format::Html {
        let renderer = MarkdownRenderer::with_theme(&folio.config.highlight_theme);
        println!("{}", renderer.render(&resolved.content));
    } else {
        println!("{}", resolved.content);
    }

    Ok(())
}
