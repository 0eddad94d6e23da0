//! Article resolver - maps a slug and language to a markdown file

use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::article::{ArticleConfig, ArticleDetail, ResolvedArticle, DEFAULT_READ_TIME, UNTITLED};
use super::{FrontMatter, Language};
use crate::error::{ArticleError, Missing, Result};

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();
}

/// Reject slugs that could escape the articles directory
pub fn validate_slug(slug: &str) -> Result<()> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(ArticleError::InvalidSlug(slug.to_string()))
    }
}

/// Locates and parses article files in one directory
#[derive(Debug, Clone)]
pub struct ArticleResolver {
    dir: PathBuf,
    legacy_names: bool,
}

impl ArticleResolver {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            legacy_names: false,
        }
    }

    /// Also accept `{slug}-{lang}.md` after the canonical name
    pub fn with_legacy_names(mut self, enabled: bool) -> Self {
        self.legacy_names = enabled;
        self
    }

    pub fn articles_dir(&self) -> &Path {
        &self.dir
    }

    /// Candidate paths for one language, in lookup order
    pub fn candidates(&self, slug: &str, lang: Language) -> Vec<PathBuf> {
        let mut paths = vec![self.dir.join(format!("{}.{}.md", slug, lang))];
        if self.legacy_names {
            paths.push(self.dir.join(format!("{}-{}.md", slug, lang)));
        }
        paths
    }

    /// First existing candidate for `slug` in `lang`
    pub fn locate(&self, slug: &str, lang: Language) -> Result<Option<PathBuf>> {
        validate_slug(slug)?;
        Ok(self
            .candidates(slug, lang)
            .into_iter()
            .find(|path| path.is_file()))
    }

    pub fn exists(&self, slug: &str, lang: Language) -> Result<bool> {
        Ok(self.locate(slug, lang)?.is_some())
    }

    /// Resolve an article, falling back to the other language when the
    /// requested one has no file. `entry` supplies catalog values for
    /// fields the front-matter leaves out.
    pub fn resolve(
        &self,
        slug: &str,
        requested: Language,
        entry: Option<&ArticleConfig>,
    ) -> Result<ResolvedArticle> {
        validate_slug(slug)?;

        let mut searched_paths = Vec::new();
        for lang in [requested, requested.other()] {
            for path in self.candidates(slug, lang) {
                if path.is_file() {
                    tracing::debug!("Resolved {} ({}) to {:?}", slug, requested, path);
                    return self.read_article(&path, slug, lang, requested, entry);
                }
                searched_paths.push(path);
            }
        }

        tracing::info!("No file found for {} ({})", slug, requested);

        Err(ArticleError::NotFound(Box::new(Missing {
            slug: slug.to_string(),
            lang: requested,
            searched_paths,
            existing_files: self.existing_files(),
            articles_directory: self.dir.clone(),
        })))
    }

    fn read_article(
        &self,
        path: &Path,
        slug: &str,
        lang: Language,
        requested: Language,
        entry: Option<&ArticleConfig>,
    ) -> Result<ResolvedArticle> {
        let source = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&source).map_err(|source| {
            ArticleError::Frontmatter {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let title = non_empty(fm.title)
            .or_else(|| entry.and_then(|e| e.title.get_or_other(lang).map(str::to_string)))
            .unwrap_or_else(|| UNTITLED.to_string());
        let description = non_empty(fm.description)
            .or_else(|| entry.and_then(|e| e.description.get_or_other(lang).map(str::to_string)))
            .unwrap_or_default();
        let thumbnail = non_empty(fm.thumbnail)
            .or_else(|| entry.and_then(|e| e.thumbnail.clone()))
            .unwrap_or_default();
        let date = non_empty(fm.date)
            .or_else(|| entry.map(|e| e.date.clone()))
            .unwrap_or_else(today);

        let article = ArticleDetail {
            slug: slug.to_string(),
            lang,
            requested_lang: requested,
            fallback: lang != requested,
            title,
            description,
            thumbnail,
            date,
            tags: fm.tags,
            read_time: fm.read_time.filter(|&t| t > 0).unwrap_or(DEFAULT_READ_TIME),
            featured: fm.featured,
            category: fm.category.or_else(|| entry.and_then(|e| e.category.clone())),
            author: fm.author.or_else(|| entry.and_then(|e| e.author.clone())),
        };

        Ok(ResolvedArticle {
            article,
            content: body.trim().to_string(),
            html: None,
        })
    }

    /// Sorted file names in the articles directory, empty if it is missing
    pub fn existing_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        let mut files: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        files.sort();
        files
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Localized;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn ai_book_entry() -> ArticleConfig {
        ArticleConfig {
            slug: "ai-book".to_string(),
            title: Localized::new("기계는 왜 학습하는가", "Why Machines Learn"),
            description: Localized::new("선형 모델", "Linear models"),
            thumbnail: Some("/images/article_ai1.png".to_string()),
            date: "2025-05-27".to_string(),
            tags: vec!["AI".to_string()],
            read_time: 30,
            featured: true,
            published: true,
            category: Some("AI".to_string()),
            author: Some("Kayoung".to_string()),
        }
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("ai-book").is_ok());
        assert!(validate_slug("webview_ios2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("../etc/passwd").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug("-leading").is_err());
    }

    #[test]
    fn test_resolve_requested_language() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "ai-book.en.md",
            "---\ntitle: Why Machines Learn\ntags: [a, b]\n---\n\n# Chapter 1\n",
        );

        let resolver = ArticleResolver::new(tmp.path());
        let resolved = resolver.resolve("ai-book", Language::En, None).unwrap();
        assert_eq!(resolved.article.title, "Why Machines Learn");
        assert_eq!(resolved.article.lang, Language::En);
        assert!(!resolved.article.fallback);
        assert_eq!(resolved.article.tags, vec!["a", "b"]);
        assert_eq!(resolved.content, "# Chapter 1");
    }

    #[test]
    fn test_falls_back_to_other_language() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "ai-book.ko.md",
            "---\ntitle: 기계는 왜 학습하는가\ndescription: 선형 모델\n---\n본문",
        );

        let resolver = ArticleResolver::new(tmp.path());
        let resolved = resolver.resolve("ai-book", Language::En, None).unwrap();
        assert_eq!(resolved.article.title, "기계는 왜 학습하는가");
        assert_eq!(resolved.article.description, "선형 모델");
        assert_eq!(resolved.article.lang, Language::Ko);
        assert_eq!(resolved.article.requested_lang, Language::En);
        assert!(resolved.article.fallback);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bare.ko.md", "Just a body");

        let resolver = ArticleResolver::new(tmp.path());
        let article = resolver.resolve("bare", Language::Ko, None).unwrap().article;
        assert_eq!(article.title, UNTITLED);
        assert_eq!(article.description, "");
        assert_eq!(article.thumbnail, "");
        assert_eq!(article.date, today());
        assert!(article.tags.is_empty());
        assert_eq!(article.read_time, DEFAULT_READ_TIME);
        assert!(!article.featured);
    }

    #[test]
    fn test_zero_read_time_uses_default() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "quick.ko.md", "---\ntitle: Quick\nreadTime: 0\n---\nBody");

        let resolver = ArticleResolver::new(tmp.path());
        let article = resolver.resolve("quick", Language::Ko, None).unwrap().article;
        assert_eq!(article.read_time, DEFAULT_READ_TIME);
    }

    #[test]
    fn test_catalog_fills_missing_fields() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "ai-book.en.md", "---\nreadTime: 12\n---\nBody");

        let resolver = ArticleResolver::new(tmp.path());
        let entry = ai_book_entry();
        let article = resolver
            .resolve("ai-book", Language::En, Some(&entry))
            .unwrap()
            .article;
        assert_eq!(article.title, "Why Machines Learn");
        assert_eq!(article.description, "Linear models");
        assert_eq!(article.thumbnail, "/images/article_ai1.png");
        assert_eq!(article.date, "2025-05-27");
        assert_eq!(article.read_time, 12);
        assert_eq!(article.author.as_deref(), Some("Kayoung"));
    }

    #[test]
    fn test_not_found_reports_searched_paths() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "other.ko.md", "x");

        let resolver = ArticleResolver::new(tmp.path());
        let err = resolver.resolve("missing", Language::Ko, None).unwrap_err();
        let missing = match err {
            ArticleError::NotFound(missing) => missing,
            other => panic!("expected NotFound, got {other:?}"),
        };
        assert_eq!(
            missing.searched_paths,
            vec![
                tmp.path().join("missing.ko.md"),
                tmp.path().join("missing.en.md"),
            ]
        );
        assert_eq!(missing.existing_files, vec!["other.ko.md"]);
        assert_eq!(missing.lang, Language::Ko);
    }

    #[test]
    fn test_legacy_hyphen_names() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "old-post-en.md", "---\ntitle: Legacy\n---\n");

        let strict = ArticleResolver::new(tmp.path());
        assert!(!strict.exists("old-post", Language::En).unwrap());

        let legacy = ArticleResolver::new(tmp.path()).with_legacy_names(true);
        assert!(legacy.exists("old-post", Language::En).unwrap());
        let article = legacy.resolve("old-post", Language::En, None).unwrap();
        assert_eq!(article.article.title, "Legacy");
    }

    #[test]
    fn test_invalid_slug_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let resolver = ArticleResolver::new(tmp.path());
        assert!(matches!(
            resolver.resolve("../secret", Language::Ko, None),
            Err(ArticleError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_malformed_frontmatter_is_an_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "broken.ko.md", "---\ntitle: [oops\n---\nBody");

        let resolver = ArticleResolver::new(tmp.path());
        assert!(matches!(
            resolver.resolve("broken", Language::Ko, None),
            Err(ArticleError::Frontmatter { .. })
        ));
    }
}
