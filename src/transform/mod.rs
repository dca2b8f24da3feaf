//! Fragment cleanup and conversion into the requested content format.
//!
//! ```text
//! fragment → decode entities → sanitize → normalize whitespace → html | md | txt
//! ```

pub mod markdown;
pub mod sanitize;
pub mod text;

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

use crate::app::Result;
use crate::domain::ContentFormat;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline pattern"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTransformer;

impl ContentTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Cleans a raw fragment and renders it in `format`.
    ///
    /// Sanitization always happens before the format branch, so every
    /// format only ever sees allow-listed markup.
    pub fn transform(&self, fragment: &str, format: ContentFormat) -> Result<String> {
        let decoded = decode_html_entities(fragment);
        let sanitized = sanitize::sanitize(&decoded);
        let normalized = normalize_whitespace(&sanitized);

        match format {
            ContentFormat::Html => Ok(normalized),
            ContentFormat::Markdown => markdown::to_markdown(&normalized),
            ContentFormat::Text => Ok(text::render_html(&normalized)),
        }
    }
}

/// Collapses whitespace runs to one space, then newline runs to two.
pub fn normalize_whitespace(content: &str) -> String {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let content = WHITESPACE_RUN.replace_all(&content, " ");
    EXCESS_NEWLINES.replace_all(&content, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a   b\t\tc"), "a b c");
        assert_eq!(normalize_whitespace("a\r\n\r\nb"), "a b");
        assert_eq!(normalize_whitespace("a\nb"), "a\nb");
    }

    #[test]
    fn test_html_format_returns_sanitized_fragment() {
        let transformer = ContentTransformer::new();
        let html = transformer
            .transform(
                "<script>evil()</script><div><p>hi</p></div>",
                ContentFormat::Html,
            )
            .unwrap();
        assert_eq!(html, "<p>hi</p>");
    }

    #[test]
    fn test_entities_are_decoded_before_sanitizing() {
        let transformer = ContentTransformer::new();
        let html = transformer
            .transform("&lt;b&gt;bold&lt;/b&gt; &amp;&nbsp;more", ContentFormat::Html)
            .unwrap();
        assert!(html.starts_with("<b>bold</b>"));
    }

    #[test]
    fn test_text_format_uses_dom_renderer() {
        let transformer = ContentTransformer::new();
        let text = transformer
            .transform("<h1>Title</h1>\n\n\n<p>Hello</p>", ContentFormat::Text)
            .unwrap();
        assert_eq!(text, "\nTitle\n-----\n Hello\n\n");
    }

    #[test]
    fn test_markdown_format() {
        let transformer = ContentTransformer::new();
        let md = transformer
            .transform("<h2>Part</h2><ul><li>one</li></ul>", ContentFormat::Markdown)
            .unwrap();
        assert!(md.contains("## Part"));
        assert!(md.contains("one"));
    }

    #[test]
    fn test_sanitization_applies_to_every_format() {
        let transformer = ContentTransformer::new();
        let fragment = r#"<p onclick="x()">hi<script>alert(1)</script></p>"#;
        for format in [ContentFormat::Html, ContentFormat::Markdown, ContentFormat::Text] {
            let out = transformer.transform(fragment, format).unwrap();
            assert!(!out.contains("alert"), "{} output kept script: {}", format, out);
            assert!(!out.contains("onclick"));
            assert!(out.contains("hi"));
        }
    }
}
