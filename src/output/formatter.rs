use std::fmt::Write;

use crate::app::Result;
use crate::domain::{OutputType, Page};

const SEPARATOR: &str = "\n\n---\n\n";

/// Renders `pages` as one document of the given output type.
///
/// PDF output carries the plain-text document; the writer lays it out.
pub fn format_pages(pages: &[Page], output_type: OutputType) -> Result<String> {
    match output_type {
        OutputType::Json => Ok(serde_json::to_string_pretty(pages)?),
        OutputType::Jsonl => format_json_lines(pages),
        OutputType::Md => Ok(format_markdown(pages)),
        OutputType::Txt | OutputType::Pdf => Ok(format_text(pages)),
    }
}

fn format_json_lines(pages: &[Page]) -> Result<String> {
    let mut out = String::new();
    for page in pages {
        out.push_str(&serde_json::to_string(page)?);
        out.push('\n');
    }
    Ok(out)
}

fn format_markdown(pages: &[Page]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = write!(
            out,
            "# {}\n\nURL: {}\n\nDescription: {}\n\n{}",
            page.display_title(),
            page.url,
            page.description,
            page.content
        );
        out.push_str(SEPARATOR);
    }
    out
}

fn format_text(pages: &[Page]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = write!(
            out,
            "Title: {}\nURL: {}\nDescription: {}\nContent:\n{}\n",
            page.title,
            page.url,
            page.description,
            page.content.trim()
        );
        out.push_str(SEPARATOR);
    }
    out
}
