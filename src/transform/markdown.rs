//! HTML to Markdown conversion.
//!
//! `htmd` handles the inline and block elements. Tables are rendered here as
//! pipe tables: each `table` is swapped for a placeholder word before
//! conversion and the rendered table is spliced back in afterwards.

use crate::app::{ExportError, Result};
use crate::dom::{self, Element, Node};
use crate::transform::text::table_rows;

const PLACEHOLDER_PREFIX: &str = "MDTABLEPLACEHOLDER";

pub fn to_markdown(html: &str) -> Result<String> {
    let mut nodes = dom::parse_fragment(html);
    let mut tables = Vec::new();
    extract_tables(&mut nodes, &mut tables);

    let mut markdown = htmd::convert(&dom::serialize(&nodes))
        .map_err(|e| ExportError::MarkdownConversion(e.to_string()))?;

    for (index, table) in tables.iter().enumerate() {
        markdown = splice_table(&markdown, &placeholder(index), table).ok_or_else(|| {
            ExportError::MarkdownConversion(format!("table {} was lost during conversion", index))
        })?;
    }

    Ok(tidy(&markdown))
}

fn placeholder(index: usize) -> String {
    format!("{}{}X", PLACEHOLDER_PREFIX, index)
}

/// Replaces `placeholder` with `table`, carrying over the blockquote
/// marker of the line the placeholder sits on.
fn splice_table(markdown: &str, placeholder: &str, table: &str) -> Option<String> {
    let at = markdown.find(placeholder)?;
    let line_start = markdown[..at].rfind('\n').map_or(0, |i| i + 1);
    let lead = &markdown[line_start..at];
    let after = &markdown[at + placeholder.len()..];

    let quoted = lead.contains('>') && lead.chars().all(|c| c == '>' || c == ' ');
    let replacement = if quoted {
        let mut block = table.lines().collect::<Vec<_>>().join(&format!("\n{}", lead));
        if !after.trim().is_empty() {
            block.push('\n');
            block.push_str(lead.trim_end());
        }
        block
    } else {
        format!("\n\n{}\n\n", table)
    };

    Some(format!("{}{}{}", &markdown[..at], replacement, after))
}

fn extract_tables(nodes: &mut [Node], tables: &mut Vec<String>) {
    for node in nodes.iter_mut() {
        let Node::Element(element) = node else {
            continue;
        };

        if element.tag == "table" {
            let markdown = render_table(element);
            *node = Node::Text(placeholder(tables.len()));
            tables.push(markdown);
        } else {
            extract_tables(&mut element.children, tables);
        }
    }
}

/// Renders a table as a pipe table; the first row becomes the header.
fn render_table(table: &Element) -> String {
    let rows: Vec<Vec<String>> = table_rows(table)
        .into_iter()
        .map(|row| {
            row.child_elements()
                .filter(|cell| cell.tag == "td" || cell.tag == "th")
                .map(|cell| escape_cell(&cell.text()))
                .collect()
        })
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (index, row) in rows.iter().enumerate() {
        let mut cells = row.clone();
        cells.resize(columns, String::new());
        lines.push(format!("| {} |", cells.join(" | ")));
        if index == 0 {
            lines.push(format!("|{}", " --- |".repeat(columns)));
        }
    }
    lines.join("\n")
}

fn escape_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

fn tidy(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut newlines = 0;
    for c in markdown.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        out.push(c);
    }
    out.trim().to_string()
}
