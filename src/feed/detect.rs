use quick_xml::events::Event;
use quick_xml::Reader;

use crate::app::{ExportError, Result};
use crate::domain::FeedKind;
use crate::fetcher::SourceReader;

/// Reads `reference` and classifies it by its root element.
pub async fn detect_feed_kind(source: &SourceReader, reference: &str) -> Result<FeedKind> {
    let body = source.read(reference).await?;
    let kind = sniff_feed_kind(reference, &body)?;
    tracing::debug!("Detected {} feed at {}", kind, reference);
    Ok(kind)
}

/// Decodes `body` only up to its root element and maps that element to a
/// feed kind.
pub fn sniff_feed_kind(reference: &str, body: &[u8]) -> Result<FeedKind> {
    let root = root_element(reference, body)?;
    FeedKind::from_root(&root).ok_or_else(|| ExportError::UnknownFeedType {
        target: reference.to_string(),
        root,
    })
}

fn root_element(reference: &str, body: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ExportError::xml_decode(reference, "document has no root element"))
            }
            Err(e) => return Err(ExportError::xml_decode(reference, e)),
            Ok(_) => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::memory::MemoryFetcher;
    use reqwest::StatusCode;
    use std::sync::Arc;

    #[test]
    fn test_urlset_is_a_sitemap() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
<url><loc>https://x.test/</loc></url></urlset>"#;
        assert_eq!(sniff_feed_kind("s.xml", body).unwrap(), FeedKind::Sitemap);
    }

    #[test]
    fn test_rss_root() {
        let body = br#"<?xml version="1.0"?><!-- generated --><rss version="2.0"><channel/></rss>"#;
        assert_eq!(sniff_feed_kind("f.xml", body).unwrap(), FeedKind::Rss);
    }

    #[test]
    fn test_prefixed_root_uses_local_name() {
        let body = br#"<sm:urlset xmlns:sm="http://www.sitemaps.org/schemas/sitemap/0.9"/>"#;
        assert_eq!(sniff_feed_kind("s.xml", body).unwrap(), FeedKind::Sitemap);
    }

    #[test]
    fn test_other_root_is_unknown() {
        let body = br#"<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        let err = sniff_feed_kind("atom.xml", body).unwrap_err();
        assert!(matches!(err, ExportError::UnknownFeedType { ref root, .. } if root == "feed"));
    }

    #[test]
    fn test_only_the_root_is_decoded() {
        // Broken markup after the root element is never reached.
        let body = b"<rss><channel><item></wrong>";
        assert_eq!(sniff_feed_kind("f.xml", body).unwrap(), FeedKind::Rss);
    }

    #[test]
    fn test_empty_document_is_a_decode_error() {
        let err = sniff_feed_kind("empty.xml", b"").unwrap_err();
        assert!(matches!(err, ExportError::XmlDecode { .. }));
    }

    #[tokio::test]
    async fn test_http_status_is_checked_before_decoding() {
        let fetcher = MemoryFetcher::new().with_status(
            "https://x.test/sitemap.xml",
            StatusCode::NOT_FOUND,
            "<urlset/>",
        );
        let source = SourceReader::new(Arc::new(fetcher));
        let err = detect_feed_kind(&source, "https://x.test/sitemap.xml")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::HttpStatus { status, .. } if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_a_fetch_error() {
        let source = SourceReader::new(Arc::new(MemoryFetcher::new()));
        let err = detect_feed_kind(&source, "https://x.test/feed").await.unwrap_err();
        assert!(matches!(err, ExportError::Fetch { .. }));
    }
}
