use std::fmt;

/// Kind of feed, decided by the document's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Sitemap,
    Rss,
}

impl FeedKind {
    pub fn from_root(local_name: &str) -> Option<Self> {
        match local_name {
            "urlset" => Some(Self::Sitemap),
            "rss" => Some(Self::Rss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sitemap => "sitemap",
            Self::Rss => "rss",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<item>` of an RSS channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub description: String,
}
