//! Article models: catalog entries, list summaries and resolved articles

use serde::{Deserialize, Serialize};

use super::{Language, Localized};

/// Read time used when neither front-matter nor catalog provides one
pub const DEFAULT_READ_TIME: u32 = 5;

/// Title used when neither front-matter nor catalog provides one
pub const UNTITLED: &str = "Untitled";

/// A catalog entry declared in `articles.yml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleConfig {
    pub slug: String,
    pub title: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_read_time")]
    pub read_time: u32,
    #[serde(default)]
    pub featured: bool,
    /// Entries are published unless they opt out
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

fn default_read_time() -> u32 {
    DEFAULT_READ_TIME
}

fn default_published() -> bool {
    true
}

/// One item of the article list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub slug: String,
    pub title: Localized,
    pub description: Localized,
    pub thumbnail: String,
    pub date: String,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<&ArticleConfig> for ArticleSummary {
    fn from(entry: &ArticleConfig) -> Self {
        Self {
            id: entry.slug.clone(),
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            thumbnail: entry.thumbnail.clone().unwrap_or_default(),
            date: entry.date.clone(),
            tags: entry.tags.clone(),
            read_time: entry.read_time,
            featured: entry.featured,
            category: entry.category.clone(),
            author: entry.author.clone(),
        }
    }
}

/// Single-language metadata of a resolved article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub slug: String,
    /// Language of the file that was served
    pub lang: Language,
    pub requested_lang: Language,
    /// True when the requested language was missing and the other one was served
    pub fallback: bool,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub date: String,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Detail payload: metadata plus the markdown body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedArticle {
    pub article: ArticleDetail,
    /// Markdown body with the front-matter stripped
    pub content: String,
    /// Rendered body, only present when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_defaults() {
        let yaml = r#"
slug: ai-book
title:
  ko: 기계는 왜 학습하는가
  en: Why Machines Learn
date: '2025-05-27'
"#;
        let entry: ArticleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.read_time, DEFAULT_READ_TIME);
        assert!(entry.published);
        assert!(!entry.featured);
        assert_eq!(entry.description, Localized::default());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let entry = ArticleConfig {
            slug: "sodong-web-opt".to_string(),
            title: Localized::new("성능 최적화", "Performance"),
            description: Localized::default(),
            thumbnail: None,
            date: "2024-09-14".to_string(),
            tags: vec!["React".to_string()],
            read_time: 5,
            featured: true,
            published: true,
            category: Some("Frontend".to_string()),
            author: None,
        };

        let json = serde_json::to_value(ArticleSummary::from(&entry)).unwrap();
        assert_eq!(json["id"], "sodong-web-opt");
        assert_eq!(json["readTime"], 5);
        assert_eq!(json["thumbnail"], "");
        assert_eq!(json["title"]["en"], "Performance");
        assert!(json.get("author").is_none());
    }
}
