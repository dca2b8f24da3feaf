use std::sync::Arc;

use crate::app::{ExportError, Result};
use crate::fetcher::Fetcher;

/// Opens feed and page references, which are either HTTP(S) URLs or local
/// file paths.
#[derive(Clone)]
pub struct SourceReader {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl SourceReader {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    pub fn is_remote(reference: &str) -> bool {
        reference.starts_with("http://") || reference.starts_with("https://")
    }

    pub async fn read(&self, reference: &str) -> Result<Vec<u8>> {
        if Self::is_remote(reference) {
            self.fetcher.fetch(reference).await
        } else {
            tokio::fs::read(reference)
                .await
                .map_err(|e| ExportError::fetch(reference, e))
        }
    }
}
