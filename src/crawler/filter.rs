use url::{ParseError, Url};

/// Base against which relative candidates are resolved to read their path.
const RELATIVE_BASE: &str = "file:///";

/// URL-path prefix rule deciding which feed entries are crawled.
///
/// `""` and `"*"` match every URL. Any other pattern is a literal path
/// prefix with an optional trailing `*`, compared against the URL path
/// without its leading `/`. Relative references such as `blog/a.html`
/// are matched on their own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFilter {
    prefix: Option<String>,
}

impl UrlFilter {
    pub fn new(pattern: &str) -> Self {
        let prefix = match pattern {
            "" | "*" => None,
            other => Some(other.strip_suffix('*').unwrap_or(other).to_string()),
        };
        Self { prefix }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let Some(prefix) = &self.prefix else {
            return true;
        };

        match candidate_path(candidate) {
            Some(path) => path.trim_start_matches('/').starts_with(prefix.as_str()),
            None => false,
        }
    }
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new("*")
    }
}

/// One-shot form of [`UrlFilter::matches`].
pub fn matches_filter(candidate: &str, pattern: &str) -> bool {
    UrlFilter::new(pattern).matches(candidate)
}

fn candidate_path(candidate: &str) -> Option<String> {
    match Url::parse(candidate) {
        Ok(url) => Some(url.path().to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(candidate))
            .ok()
            .map(|url| url.path().to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_and_empty_match_everything() {
        for pattern in ["", "*"] {
            let filter = UrlFilter::new(pattern);
            assert!(filter.matches("https://x.test/anything"));
            assert!(filter.matches("not a url"));
        }
    }

    #[test]
    fn test_prefix_filter() {
        let filter = UrlFilter::new("blog/");
        assert!(filter.matches("https://x.test/blog/post-1"));
        assert!(!filter.matches("https://x.test/about"));
    }

    #[test]
    fn test_trailing_wildcard_is_stripped() {
        assert!(matches_filter("https://x.test/blog/post-1", "blog*"));
        assert!(matches_filter("https://x.test/blogroll", "blog*"));
        assert!(!matches_filter("https://x.test/news/blog", "blog*"));
    }

    #[test]
    fn test_relative_candidates_match_on_their_path() {
        assert!(matches_filter("blog/a.html", "blog/"));
        assert!(matches_filter("/blog/a", "blog/"));
        assert!(matches_filter("blog/a.html?page=2", "blog/*"));
        assert!(!matches_filter("pages/about.html", "blog/"));
        assert!(!matches_filter("", "blog/"));
    }

    #[test]
    fn test_invalid_candidate_never_matches() {
        assert!(!matches_filter("http://[::1", "blog/"));
    }
}
