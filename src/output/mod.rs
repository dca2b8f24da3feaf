//! Serialization of crawled pages and writing the result to disk.

pub mod formatter;
pub mod pdf;
pub mod writer;

pub use formatter::format_pages;
pub use writer::{output_path, write_output};
