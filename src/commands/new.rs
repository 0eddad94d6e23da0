//! Create a new article file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::resolver::validate_slug;
use crate::content::{FrontMatter, Language, DEFAULT_READ_TIME};
use crate::Folio;

/// Write `{slug}.{lang}.md` with a front-matter block, returning its path
pub fn create_article(
    folio: &Folio,
    title: &str,
    slug: Option<&str>,
    lang: Language,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    validate_slug(&slug)?;

    fs::create_dir_all(&folio.articles_dir)?;
    let file_path = folio.articles_dir.join(format!("{}.{}.md", slug, lang));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let front_matter = FrontMatter {
        title: Some(title.to_string()),
        description: Some(String::new()),
        date: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
        read_time: Some(DEFAULT_READ_TIME),
        ..Default::default()
    };

    fs::write(&file_path, front_matter.to_document("")?)?;
    tracing::info!("Created {:?}", file_path);

    if folio.catalog()?.get(&slug).is_none() {
        tracing::warn!(
            "{} is not in {:?}; add an entry to publish it",
            slug,
            folio.catalog_path
        );
    }

    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, title: &str, slug: Option<&str>, lang: Option<Language>) -> Result<()> {
    let lang = lang.unwrap_or(folio.config.default_language);
    let path = create_article(folio, title, slug, lang)?;
    println!("Created: {:?}", path);
    Ok(())
}
