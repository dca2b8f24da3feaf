//! # sitemap-export
//!
//! Crawls the pages listed by an XML sitemap or RSS channel and exports a
//! chosen content region of each page as HTML, Markdown or plain text.
//!
//! ## Architecture
//!
//! A single sequential pipeline:
//!
//! ```text
//! SourceReader → feed detect → sitemap | rss
//!     → PageExtractor → ContentTransformer → output
//! ```
//!
//! - [`fetcher`]: HTTP and local-file input
//! - [`feed`]: feed type detection and URL enumeration
//! - [`extractor`]: page metadata, link rewriting, content selection
//! - [`transform`]: sanitizing and rendering a content fragment
//! - [`crawler`]: the per-entry loop with failure isolation
//!
//! ## Quick Start
//!
//! ```bash
//! # Export every page of a sitemap as plain text into output.txt
//! sitemap-export -i https://example.com/sitemap.xml -y
//!
//! # Only blog posts, article body only, as Markdown
//! sitemap-export -i https://example.com/feed.xml -c article --filter 'blog/*' -t md
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface and prompting
//! - [`config`]: TOML configuration
//! - [`crawler`]: Sitemap and RSS crawls
//! - [`dom`]: Owned DOM used by rewriting and rendering
//! - [`domain`]: Core domain models (Page, FeedKind, formats)
//! - [`extractor`]: Per-page extraction
//! - [`feed`]: Feed documents
//! - [`fetcher`]: Source reading
//! - [`output`]: Formatting and file writing
//! - [`transform`]: Content conversion

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher,
/// source reader and crawler.
pub mod app;

/// Command-line interface using clap.
///
/// Flags override configuration values; a missing input is prompted for
/// and the resolved settings are confirmed before crawling.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/sitemap-export/config.toml`, creating a commented
/// default file on first run.
pub mod config;

/// Sequential crawling of sitemap and RSS feeds.
///
/// - [`Crawler`](crawler::Crawler): feed-level driver
/// - [`UrlFilter`](crawler::UrlFilter): path-prefix inclusion rule
/// - [`CrawlProgress`](crawler::CrawlProgress): progress observer
pub mod crawler;

pub mod dom;

/// Core domain models.
///
/// - [`Page`](domain::Page): extracted content of one page
/// - [`FeedKind`](domain::FeedKind): sitemap or RSS
/// - [`ContentFormat`](domain::ContentFormat) and [`OutputType`](domain::OutputType)
pub mod domain;

/// Per-page extraction.
///
/// Reads metadata, rewrites relative links against the page origin and
/// hands the selected region to the transformer.
pub mod extractor;

pub mod feed;

/// Source reading.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for HTTP fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`SourceReader`](fetcher::SourceReader): URL or local file
pub mod fetcher;

/// Serializing pages to txt, json, jsonl or md and writing the file.
pub mod output;

/// Content conversion.
///
/// Sanitizes against a fixed allow-list, then renders HTML, Markdown
/// (htmd) or plain text (a tag-dispatching DOM walk).
pub mod transform;
