//! Sequential feed crawling.
//!
//! A crawl reads the feed once, enumerates its entries in document order and
//! extracts every entry that passes the [`UrlFilter`]. A failing page is
//! logged and skipped; a failing feed aborts the crawl.

pub mod filter;
pub mod progress;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::{ContentFormat, FeedKind, Page, RssItem};
use crate::extractor::{ContentSelector, PageExtractor};
use crate::feed;
use crate::fetcher::SourceReader;

pub use filter::{matches_filter, UrlFilter};
pub use progress::{CrawlProgress, SilentProgress};

/// What to extract from every page of a crawl.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub selector: ContentSelector,
    pub format: ContentFormat,
    pub filter: UrlFilter,
}

impl CrawlOptions {
    pub fn new(selector: ContentSelector, format: ContentFormat, filter: UrlFilter) -> Self {
        Self {
            selector,
            format,
            filter,
        }
    }
}

pub struct Crawler {
    source: SourceReader,
    extractor: PageExtractor,
    progress: Arc<dyn CrawlProgress>,
}

impl Crawler {
    pub fn new(source: SourceReader) -> Self {
        Self {
            extractor: PageExtractor::new(source.clone()),
            source,
            progress: Arc::new(SilentProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn CrawlProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Detects the feed kind of `reference` and crawls it accordingly.
    pub async fn crawl(&self, reference: &str, options: &CrawlOptions) -> Result<Vec<Page>> {
        let body = self.source.read(reference).await?;
        let kind = feed::sniff_feed_kind(reference, &body)?;
        info!("Crawling {} feed {}", kind, reference);

        match kind {
            FeedKind::Sitemap => {
                let locations = feed::parse_sitemap(reference, &body)?;
                Ok(self.extract_locations(&locations, options).await)
            }
            FeedKind::Rss => {
                let items = feed::parse_rss(reference, &body)?;
                Ok(self.extract_items(&items, options).await)
            }
        }
    }

    /// Crawls every `loc` of the sitemap at `reference`.
    pub async fn crawl_sitemap(
        &self,
        reference: &str,
        options: &CrawlOptions,
    ) -> Result<Vec<Page>> {
        let body = self.source.read(reference).await?;
        let locations = feed::parse_sitemap(reference, &body)?;
        Ok(self.extract_locations(&locations, options).await)
    }

    /// Crawls every item link of the RSS channel at `reference`.
    pub async fn crawl_rss(&self, reference: &str, options: &CrawlOptions) -> Result<Vec<Page>> {
        let body = self.source.read(reference).await?;
        let items = feed::parse_rss(reference, &body)?;
        Ok(self.extract_items(&items, options).await)
    }

    async fn extract_locations(&self, locations: &[String], options: &CrawlOptions) -> Vec<Page> {
        let mut pages = Vec::new();
        self.progress.start(locations.len(), "Fetching sitemap pages");

        for location in locations {
            if let Some(page) = self.extract_entry(location, options).await {
                pages.push(page);
            }
            self.progress.advance();
        }

        self.progress.finish();
        info!("Extracted {} of {} sitemap pages", pages.len(), locations.len());
        pages
    }

    async fn extract_items(&self, items: &[RssItem], options: &CrawlOptions) -> Vec<Page> {
        let mut pages = Vec::new();
        self.progress.start(items.len(), "Fetching RSS pages");

        for item in items {
            if item.link.is_empty() {
                warn!("Skipping RSS item without a link: {:?}", item.title);
            } else if let Some(mut page) = self.extract_entry(&item.link, options).await {
                page.description = item.description.clone();
                pages.push(page);
            }
            self.progress.advance();
        }

        self.progress.finish();
        info!("Extracted {} of {} RSS items", pages.len(), items.len());
        pages
    }

    async fn extract_entry(&self, url: &str, options: &CrawlOptions) -> Option<Page> {
        if !options.filter.matches(url) {
            debug!("Filtered out {}", url);
            return None;
        }

        match self
            .extractor
            .extract(url, &options.selector, options.format)
            .await
        {
            Ok(page) => {
                debug!("Extracted {}", url);
                Some(page)
            }
            Err(e) => {
                warn!("Skipping {}: {}", url, e);
                None
            }
        }
    }
}
