pub mod http_fetcher;
#[cfg(test)]
pub(crate) mod memory;
pub mod source;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::{HttpConfig, HttpFetcher};
pub use source::SourceReader;

/// Retrieves the body behind an HTTP(S) URL.
///
/// Implementations fail with `Fetch` on transport errors and `HttpStatus`
/// when the server answers with a non-success status.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
