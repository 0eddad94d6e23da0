//! Supported article languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ArticleError;

/// Language of an article file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Both languages, Korean first
    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// Language code used in file names and query strings
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// The other supported language
    pub fn other(self) -> Language {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            _ => Err(ArticleError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Text available in both languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub ko: String,
    pub en: String,
}

impl Localized {
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }

    /// Text for `lang`, or the other language's text when `lang` is empty
    pub fn get_or_other(&self, lang: Language) -> Option<&str> {
        [self.get(lang), self.get(lang.other())]
            .into_iter()
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Ko);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!(matches!(
            "ja".parse::<Language>(),
            Err(ArticleError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_default_is_korean() {
        assert_eq!(Language::default(), Language::Ko);
        assert_eq!(Language::Ko.other(), Language::En);
    }

    #[test]
    fn test_localized_fallback() {
        let text = Localized::new("안녕", "");
        assert_eq!(text.get(Language::En), "");
        assert_eq!(text.get_or_other(Language::En), Some("안녕"));
        assert_eq!(Localized::default().get_or_other(Language::Ko), None);
    }
}
