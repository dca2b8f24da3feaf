use url::{ParseError, Url};

use crate::dom::{self, Element, Node};

/// `scheme://host[:port]` of `page_url`, or `None` when it has no host.
pub fn origin_of(page_url: &str) -> Option<Url> {
    let parsed = Url::parse(page_url).ok()?;
    let host = parsed.host_str()?;
    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };
    Url::parse(&origin).ok()
}

/// Whether `link` is a relative reference (has no scheme of its own).
pub fn is_relative(link: &str) -> bool {
    matches!(Url::parse(link), Err(ParseError::RelativeUrlWithoutBase))
}

pub fn is_fragment_link(link: &str) -> bool {
    link.starts_with('#')
}

/// Resolves `link` against `origin`, returning `link` unchanged when it
/// cannot be resolved.
pub fn to_absolute(origin: &Url, link: &str) -> String {
    origin
        .join(link)
        .map(String::from)
        .unwrap_or_else(|_| link.to_string())
}

/// Rewrites relative anchor `href`s and image `src`s to absolute URLs.
///
/// Anchors pointing at a fragment of the same page are left alone.
pub fn rewrite_relative_links(nodes: &mut [Node], origin: &Url) {
    dom::walk_elements_mut(nodes, &mut |element: &mut Element| {
        let attribute = match element.tag.as_str() {
            "a" => "href",
            "img" => "src",
            _ => return,
        };

        let Some(link) = element.attributes.get_mut(attribute) else {
            return;
        };

        if !is_relative(link) || (attribute == "href" && is_fragment_link(link)) {
            return;
        }

        *link = to_absolute(origin, link);
    });
}
