//! Per-page extraction: metadata, link rewriting and the content fragment.

pub mod links;

use std::fmt;

use scraper::{Html, Selector};

use crate::app::{ExportError, Result};
use crate::dom::Element;
use crate::domain::{ContentFormat, Page};
use crate::fetcher::SourceReader;
use crate::transform::ContentTransformer;

/// A parsed CSS selector locating a page's content region.
#[derive(Debug, Clone)]
pub struct ContentSelector {
    source: String,
    selector: Selector,
}

impl ContentSelector {
    pub fn parse(source: &str) -> Result<Self> {
        let selector = Selector::parse(source).map_err(|e| ExportError::InvalidSelector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }
}

impl fmt::Display for ContentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Page metadata pulled from `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone)]
pub struct PageExtractor {
    source: SourceReader,
    transformer: ContentTransformer,
}

impl PageExtractor {
    pub fn new(source: SourceReader) -> Self {
        Self {
            source,
            transformer: ContentTransformer::new(),
        }
    }

    /// Fetches `url` and extracts its content region in `format`.
    pub async fn extract(
        &self,
        url: &str,
        selector: &ContentSelector,
        format: ContentFormat,
    ) -> Result<Page> {
        let body = self.source.read(url).await?;
        let html = String::from_utf8_lossy(&body);
        self.extract_from_html(url, &html, selector, format)
    }

    /// Extracts a page from an already fetched HTML document.
    pub fn extract_from_html(
        &self,
        url: &str,
        html: &str,
        selector: &ContentSelector,
        format: ContentFormat,
    ) -> Result<Page> {
        let document = Html::parse_document(html);
        let meta = read_meta(&document);

        let selected = document
            .select(&selector.selector)
            .next()
            .ok_or_else(|| ExportError::SelectorNotFound(selector.to_string()))?;

        let mut region = Element::from_element_ref(selected);
        match links::origin_of(url) {
            Some(origin) => links::rewrite_relative_links(&mut region.children, &origin),
            None => tracing::debug!("No origin for {}, leaving links untouched", url),
        }

        let content = self.transformer.transform(&region.inner_html(), format)?;

        Ok(Page {
            title: meta.title,
            url: url.to_string(),
            description: meta.description,
            tags: meta.tags,
            content,
        })
    }
}

/// Reads the title, description and tag list of a parsed document.
pub fn read_meta(document: &Html) -> PageMeta {
    let title = first_match(document, "title")
        .map(|title| title.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = meta_content(document, "description").unwrap_or_default();

    let tags = meta_content(document, "tags")
        .map(|tags| split_tags(&tags))
        .unwrap_or_default();

    PageMeta {
        title,
        description,
        tags,
    }
}

fn first_match<'a>(document: &'a Html, selector: &str) -> Option<scraper::ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn meta_content(document: &Html, name: &str) -> Option<String> {
    first_match(document, &format!("meta[name=\"{}\"]", name))
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string)
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
