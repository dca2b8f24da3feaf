pub mod feed;
pub mod format;
pub mod page;

pub use feed::{FeedKind, RssItem};
pub use format::{ContentFormat, OutputType};
pub use page::Page;
