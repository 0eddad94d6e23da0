//! Sitemap and robots.txt generation

use chrono::Local;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::ArticleSummary;

/// Characters escaped inside a URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Paths crawlers are asked to skip
const DISALLOW: [&str; 2] = ["/private/", "/admin/"];

/// Change frequency of a sitemap entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Join the site URL, root and a path
pub fn full_url(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let root = config.root.trim_matches('/');
    let path = path.trim_start_matches('/');

    [base, root, path]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Home, article index, then one entry per article
pub fn sitemap_entries(config: &SiteConfig, articles: &[ArticleSummary]) -> Vec<SitemapEntry> {
    let today = Local::now().format("%Y-%m-%d").to_string();

    let mut entries = vec![
        SitemapEntry {
            loc: full_url(config, ""),
            last_modified: today.clone(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 1.0,
        },
        SitemapEntry {
            loc: full_url(config, "articles"),
            last_modified: today,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.9,
        },
    ];

    entries.extend(articles.iter().map(|article| {
        let slug = utf8_percent_encode(&article.slug, SEGMENT).to_string();
        SitemapEntry {
            loc: full_url(config, &format!("articles/{}", slug)),
            last_modified: article.date.clone(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        }
    }));

    entries
}

pub fn sitemap_xml(config: &SiteConfig, articles: &[ArticleSummary]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in sitemap_entries(config, articles) {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&entry.loc),
            xml_escape(&entry.last_modified),
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(config: &SiteConfig) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOW {
        out.push_str(&format!("Disallow: {}\n", path));
    }
    out.push_str(&format!("\nSitemap: {}\n", full_url(config, "sitemap.xml")));
    out
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Localized;

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    fn summary(slug: &str, date: &str) -> ArticleSummary {
        ArticleSummary {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: Localized::default(),
            description: Localized::default(),
            thumbnail: String::new(),
            date: date.to_string(),
            tags: Vec::new(),
            read_time: 5,
            featured: false,
            category: None,
            author: None,
        }
    }

    #[test]
    fn test_full_url() {
        let mut config = config();
        assert_eq!(full_url(&config, ""), "https://example.com");
        assert_eq!(full_url(&config, "/articles"), "https://example.com/articles");
        config.root = "/blog/".to_string();
        assert_eq!(
            full_url(&config, "sitemap.xml"),
            "https://example.com/blog/sitemap.xml"
        );
    }

    #[test]
    fn test_sitemap_entries() {
        let entries = sitemap_entries(&config(), &[summary("ai-book", "2025-05-27")]);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].loc, "https://example.com/articles");
        assert_eq!(entries[2].loc, "https://example.com/articles/ai-book");
        assert_eq!(entries[2].last_modified, "2025-05-27");
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn test_sitemap_xml() {
        let xml = sitemap_xml(&config(), &[summary("sodong-web-opt", "2024-09-14")]);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.com/articles/sodong-web-opt</loc>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_robots() {
        let robots = robots_txt(&config());
        assert!(robots.contains("Disallow: /admin/"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
