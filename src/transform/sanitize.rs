use std::collections::{HashMap, HashSet};

use ammonia::Builder;

/// Tags that survive sanitization; everything else is unwrapped.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "hr", "p", "br", "b", "i", "strong", "em", "ol",
    "ul", "li", "a", "img", "pre", "code", "blockquote", "tr", "td", "th", "table",
];

/// Attributes kept on any allowed tag.
pub const ALLOWED_ATTRIBUTES: &[&str] =
    &["href", "src", "size", "width", "alt", "title", "colspan"];

/// Strips every tag and attribute outside the allow-lists.
///
/// Disallowed tags are removed but their text is kept, except for `script`
/// and `style` whose contents are dropped as well.
pub fn sanitize(html: &str) -> String {
    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
        .link_rel(None);

    builder.clean(html).to_string()
}
