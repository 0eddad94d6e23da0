//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter block at the top of an article file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from file contents.
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if !content.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading `---` may just be a markdown rule; require at least one `key: value` line
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    /// Render this front-matter as a fenced block followed by `body`
    pub fn to_document(&self, body: &str) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}---\n\n{}", yaml, body))
    }
}

fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }

    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };

    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");

    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: '"기계는 왜 학습하는가" 를 읽고'
description: 선형 모델과 지도학습
thumbnail: '/images/article_ai0.png'
date: '2025-05-27'
tags: ['AI', '독후감']
readTime: 30
featured: true
---

본문입니다.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("\"기계는 왜 학습하는가\" 를 읽고"));
        assert_eq!(fm.date.as_deref(), Some("2025-05-27"));
        assert_eq!(fm.tags, vec!["AI", "독후감"]);
        assert_eq!(fm.read_time, Some(30));
        assert!(fm.featured);
        assert_eq!(body.trim(), "본문입니다.");
    }

    #[test]
    fn test_unquoted_date_stays_a_string() {
        let content = "---\ntitle: Dated\ndate: 2024-09-14\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.date.as_deref(), Some("2024-09-14"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let content = "---\ntitle: Only a title\n---\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(!fm.featured);
        assert!(fm.tags.is_empty());
        assert_eq!(fm.read_time, None);
        assert_eq!(fm.description, None);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_single_string_tag() {
        let content = "---\ntitle: One tag\ntags: React\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["React"]);
    }

    #[test]
    fn test_tags_round_trip_in_order() {
        let fm = FrontMatter {
            title: Some("Round trip".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };

        let doc = fm.to_document("Hello\n").unwrap();
        let (parsed, body) = FrontMatter::parse(&doc).unwrap();
        assert_eq!(parsed.tags, vec!["a", "b"]);
        assert_eq!(parsed, fm);
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn test_flow_sequence_tags() {
        let content = "---\ntags: [a, b]\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let content = "---\ntitle: Extra\nseries: rust-notes\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.extra.get("series"),
            Some(&serde_yaml::Value::String("rust-notes".to_string()))
        );
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = FrontMatter::parse("# Heading\n\nText").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert!(body.starts_with("# Heading"));
    }

    #[test]
    fn test_markdown_rule_not_yaml() {
        let content = r#"
---

Check out https://example.com and the list below
- Item 1

---
More content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        assert!(FrontMatter::parse(content).is_err());
    }
}
