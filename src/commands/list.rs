//! List catalog articles

use anyhow::Result;
use std::collections::HashMap;

use crate::content::{ArticleSummary, Language, ListOptions};
use crate::Folio;

/// List available articles, tags or categories
pub fn run(folio: &Folio, content_type: &str, options: &ListOptions) -> Result<()> {
    let catalog = folio.catalog()?;
    let resolver = folio.resolver();
    let articles = catalog.list(&resolver, options);

    match content_type {
        "article" | "articles" => {
            println!(
                "Articles ({} of {} published):",
                articles.len(),
                catalog.published().count()
            );
            for article in &articles {
                let langs: Vec<&str> = Language::ALL
                    .into_iter()
                    .filter(|lang| resolver.exists(&article.slug, *lang).unwrap_or(false))
                    .map(Language::code)
                    .collect();
                println!(
                    "  {} - {} [{}] ({}){}",
                    article.date,
                    display_title(article, folio.config.default_language),
                    article.slug,
                    langs.join(", "),
                    if article.featured { " *" } else { "" }
                );
            }
        }
        "tag" | "tags" => {
            print_counts("Tags", articles.iter().flat_map(|a| a.tags.iter()));
        }
        "category" | "categories" => {
            print_counts(
                "Categories",
                articles.iter().filter_map(|a| a.category.as_ref()),
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: article, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

fn display_title(article: &ArticleSummary, lang: Language) -> &str {
    article.title.get_or_other(lang).unwrap_or(&article.slug)
}

fn print_counts<'a>(label: &str, names: impl Iterator<Item = &'a String>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("{} ({}):", label, counts.len());
    for (name, count) in counts {
        println!("  {} ({})", name, count);
    }
}
