use std::sync::Arc;

use crate::app::error::Result;
use crate::crawler::{CrawlProgress, Crawler};
use crate::fetcher::{Fetcher, HttpConfig, HttpFetcher, SourceReader};

/// Wires the crawler for one run around a shared fetcher.
pub struct AppContext {
    pub crawler: Crawler,
}

impl AppContext {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(http)?);
        Ok(Self::with_fetcher(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let crawler = Crawler::new(SourceReader::new(fetcher));

        Self { crawler }
    }

    pub fn with_progress(mut self, progress: Arc<dyn CrawlProgress>) -> Self {
        self.crawler = self.crawler.with_progress(progress);
        self
    }
}
