use feed_rs::parser;

use crate::app::{ExportError, Result};
use crate::domain::RssItem;

/// Decodes the `<item>`s of an RSS channel, in document order.
///
/// XML entities are resolved once by the parser; text that was escaped
/// twice in the feed stays escaped once.
pub fn parse_rss(reference: &str, body: &[u8]) -> Result<Vec<RssItem>> {
    let feed = parser::parse(body).map_err(|e| ExportError::xml_decode(reference, e))?;

    let items: Vec<RssItem> = feed
        .entries
        .into_iter()
        .map(|entry| RssItem {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.trim().to_string())
                .unwrap_or_default(),
            description: entry.summary.map(|s| s.content).unwrap_or_default(),
        })
        .collect();

    tracing::debug!("Found {} items in {}", items.len(), reference);
    Ok(items)
}
