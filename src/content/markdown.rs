//! Markdown to HTML rendering for article bodies

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const DEFAULT_THEME: &str = "base16-ocean.dark";

/// Markdown renderer with syntax-highlighted code blocks.
/// Loading syntaxes is slow, so build one and share it.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Use a named syntect theme, falling back to the default one
    pub fn with_theme(name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes
            .remove(name)
            .or_else(|| themes.remove(DEFAULT_THEME))
            .unwrap_or_default();

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Render an article body (front-matter already stripped)
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;

        let mut events: Vec<Event> = Vec::new();
        let mut code: Option<(Option<String>, String)> = None;

        for event in Parser::new_ext(markdown, options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, source)) = code.take() {
                        let block = self.highlight(&source, lang.as_deref());
                        events.push(Event::Html(CowStr::from(block)));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, source)) = code.as_mut() {
                        source.push_str(&text);
                    }
                }
                other => events.push(other),
            }
        }

        let mut output = String::new();
        html::push_html(&mut output, events.into_iter());
        output
    }

    fn highlight(&self, source: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let class = html_escape(lang);

        match highlighted_html_for_string(source, &self.syntax_set, syntax, &self.theme) {
            Ok(highlighted) => format!(
                r#"<div class="code-block language-{}">{}</div>"#,
                class, highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    class,
                    html_escape(source)
                )
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# 1장\n\n퍼셉트론과 헤브 학습.");
        assert!(html.contains("<h1>1장</h1>"));
        assert!(html.contains("<p>퍼셉트론과 헤브 학습.</p>"));
    }

    #[test]
    fn test_render_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| LCP | FCP |\n|---|---|\n| 26.3s | 3.1s |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("26.3s"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("code-block language-rust"));
        assert!(html.contains("main"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_fence_info_is_escaped() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```\"><script>\nalert(1)\n```");
        assert!(!html.contains("<script>"));
        assert!(html.contains("language-&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let renderer = MarkdownRenderer::with_theme("no-such-theme");
        let html = renderer.render("```\nplain\n```");
        assert!(html.contains("plain"));
    }
}
