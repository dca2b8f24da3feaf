use quick_xml::events::Event;
use quick_xml::Reader;

use crate::app::{ExportError, Result};

/// Collects every `<loc>` directly under a `<url>` element, in document order.
pub fn parse_sitemap(reference: &str, body: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut locations = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if name == "loc" && path.last().is_some_and(|parent| parent == "url") {
                    current = Some(String::new());
                }
                path.push(name);
            }
            Ok(Event::End(_)) => {
                if path.pop().as_deref() == Some("loc") {
                    if let Some(loc) = current.take() {
                        locations.push(loc.trim().to_string());
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(loc) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| ExportError::xml_decode(reference, e))?;
                    loc.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(loc) = current.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExportError::xml_decode(reference, e)),
            Ok(_) => {}
        }
        buf.clear();
    }

    if let Some(open) = path.last() {
        return Err(ExportError::xml_decode(
            reference,
            format!("unexpected end of document inside <{}>", open),
        ));
    }

    tracing::debug!("Found {} locations in {}", locations.len(), reference);
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://x.test/</loc>
    <lastmod>2024-01-01</lastmod>
  </url>
  <url>
    <loc>
      https://x.test/blog/post-1?a=1&amp;b=2
    </loc>
  </url>
  <url><loc><![CDATA[https://x.test/about]]></loc></url>
</urlset>"#;

    #[test]
    fn test_collects_locations_in_order() {
        let locations = parse_sitemap("sitemap.xml", SITEMAP.as_bytes()).unwrap();
        assert_eq!(
            locations,
            vec![
                "https://x.test/",
                "https://x.test/blog/post-1?a=1&b=2",
                "https://x.test/about",
            ]
        );
    }

    #[test]
    fn test_loc_outside_url_is_ignored() {
        let body = br#"<urlset><loc>https://x.test/stray</loc>
<url><loc>https://x.test/a</loc></url></urlset>"#;
        let locations = parse_sitemap("sitemap.xml", body).unwrap();
        assert_eq!(locations, vec!["https://x.test/a"]);
    }

    #[test]
    fn test_empty_urlset() {
        let locations = parse_sitemap("sitemap.xml", b"<urlset></urlset>").unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn test_mismatched_tags_are_a_decode_error() {
        let body = b"<urlset><url><loc>https://x.test/</url></urlset>";
        let err = parse_sitemap("sitemap.xml", body).unwrap_err();
        assert!(matches!(err, ExportError::XmlDecode { .. }));
    }

    #[test]
    fn test_truncated_document_is_a_decode_error() {
        let body = b"<urlset><url><loc>https://x.test/</loc>";
        let err = parse_sitemap("sitemap.xml", body).unwrap_err();
        assert!(matches!(err, ExportError::XmlDecode { .. }));
    }
}
