//! Feed documents: type detection and URL enumeration.
//!
//! - [`detect`]: classifies a document by its root element
//! - [`sitemap`]: `urlset` → `url` → `loc`
//! - [`rss`]: `rss` → `channel` → `item`

pub mod detect;
pub mod rss;
pub mod sitemap;

pub use detect::{detect_feed_kind, sniff_feed_kind};
pub use rss::parse_rss;
pub use sitemap::parse_sitemap;
