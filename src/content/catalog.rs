//! Article catalog - the static list of publishable articles

use chrono::{DateTime, NaiveDate};
use std::fs;
use std::path::Path;

use super::article::{ArticleConfig, ArticleSummary};
use super::resolver::{validate_slug, ArticleResolver};
use super::Language;
use crate::error::{ArticleError, Result};

/// Declared articles, loaded once and never mutated
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ArticleConfig>,
}

/// Ordering and filtering applied to the available list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Featured articles first, each group still newest first
    pub featured_first: bool,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl Catalog {
    pub fn new(entries: Vec<ArticleConfig>) -> Self {
        Self { entries }
    }

    /// Load the catalog from a YAML list. A missing file yields an empty catalog.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Catalog {:?} not found, no articles will be listed", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let entries: Vec<ArticleConfig> =
            serde_yaml::from_str(&content).map_err(|source| ArticleError::Catalog {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded {} catalog entries from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ArticleConfig] {
        &self.entries
    }

    pub fn get(&self, slug: &str) -> Option<&ArticleConfig> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn published(&self) -> impl Iterator<Item = &ArticleConfig> {
        self.entries.iter().filter(|e| e.published)
    }

    pub fn featured(&self) -> impl Iterator<Item = &ArticleConfig> {
        self.published().filter(|e| e.featured)
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ArticleConfig> {
        self.published()
            .filter(move |e| e.category.as_deref() == Some(category))
    }

    /// Published entries with at least one language file on disk, newest first.
    /// Entries that fail validation are logged and skipped.
    pub fn list_available(&self, resolver: &ArticleResolver) -> Vec<ArticleSummary> {
        let mut available: Vec<(NaiveDate, ArticleSummary)> = Vec::new();

        for entry in self.published() {
            match check_entry(entry, resolver) {
                Ok(Some(item)) => available.push(item),
                Ok(None) => {
                    tracing::warn!("No markdown files found for {}, skipping", entry.slug);
                }
                Err(e) => {
                    tracing::warn!("Skipping catalog entry {:?}: {}", entry.slug, e);
                }
            }
        }

        available.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!(
            "{} of {} catalog entries available",
            available.len(),
            self.entries.len()
        );

        available.into_iter().map(|(_, summary)| summary).collect()
    }

    /// `list_available` with featured ordering, category filter and limit applied
    pub fn list(&self, resolver: &ArticleResolver, options: &ListOptions) -> Vec<ArticleSummary> {
        let mut articles = self.list_available(resolver);

        if let Some(category) = &options.category {
            articles.retain(|a| a.category.as_deref() == Some(category.as_str()));
        }

        if options.featured_first {
            // stable, so date order is kept inside each group
            articles.sort_by_key(|a| !a.featured);
        }

        if let Some(limit) = options.limit {
            articles.truncate(limit);
        }

        articles
    }
}

fn check_entry(
    entry: &ArticleConfig,
    resolver: &ArticleResolver,
) -> Result<Option<(NaiveDate, ArticleSummary)>> {
    validate_slug(&entry.slug)?;
    let date = parse_date(&entry.date).ok_or_else(|| ArticleError::InvalidDate {
        slug: entry.slug.clone(),
        date: entry.date.clone(),
    })?;

    let ko = resolver.exists(&entry.slug, Language::Ko)?;
    let en = resolver.exists(&entry.slug, Language::En)?;
    tracing::debug!("{}: ko={} en={}", entry.slug, ko, en);

    if !ko && !en {
        return Ok(None);
    }

    Ok(Some((date, ArticleSummary::from(entry))))
}

/// Parse a catalog date (`YYYY-MM-DD`, `YYYY/MM/DD` or RFC 3339)
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
