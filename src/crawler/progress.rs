/// Observer notified as a crawl walks its feed entries.
///
/// Every entry advances the counter, whether it was extracted, filtered
/// out, skipped or failed.
pub trait CrawlProgress: Send + Sync {
    fn start(&self, total: usize, label: &str);
    fn advance(&self);
    fn finish(&self);
}

/// Progress sink that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl CrawlProgress for SilentProgress {
    fn start(&self, _total: usize, _label: &str) {}
    fn advance(&self) {}
    fn finish(&self) {}
}
