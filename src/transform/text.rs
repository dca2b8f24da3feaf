//! Plain-text rendering of a sanitized fragment.
//!
//! The renderer walks the DOM depth-first and dispatches on the tag name.
//! Text emitted for any tag other than `pre` has its line breaks stripped;
//! structure comes only from what each tag emits.

use crate::dom::{self, Element, Node};

const INDENT: &str = "  ";

/// Parses `html` and renders it as plain text.
pub fn render_html(html: &str) -> String {
    render(&dom::parse_fragment(html))
}

/// Renders the top-level nodes of a fragment as plain text.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&strip_line_breaks(text)),
        Node::Element(element) => render_element(element, depth, out),
    }
}

fn render_element(element: &Element, depth: usize, out: &mut String) {
    match element.tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let text = strip_line_breaks(&element.text());
            out.push('\n');
            out.push_str(&text);
            out.push('\n');
            out.push_str(&"-".repeat(text.chars().count()));
            out.push('\n');
        }
        "p" => {
            out.push_str(&strip_line_breaks(&element.text()));
            out.push_str("\n\n");
        }
        "ul" => return render_list(element, false, depth, out),
        "ol" => return render_list(element, true, depth, out),
        "li" => {}
        "br" => out.push('\n'),
        "table" => return render_table(element, out),
        "a" => render_anchor(element, out),
        "img" => render_image(element, out),
        "pre" => {
            out.push_str("CODE:\n");
            out.push_str(&element.text());
            out.push('\n');
            return;
        }
        _ => out.push_str(&strip_line_breaks(&element.text())),
    }

    // Text children were already emitted as part of the element's text.
    for child in element.child_elements() {
        render_element(child, depth, out);
    }
}

fn render_anchor(element: &Element, out: &mut String) {
    let text = strip_line_breaks(&element.text());
    match element.attr("href") {
        Some(href) if !href.starts_with('#') => {
            out.push_str(&format!("{} ({}) ", text, href));
        }
        _ => out.push_str(&text),
    }
}

fn render_image(element: &Element, out: &mut String) {
    let Some(src) = element.attr("src") else {
        return;
    };

    out.push('\n');
    match element.attr("alt") {
        Some(alt) => out.push_str(&format!("Image: {} ({})", alt, src)),
        None => out.push_str(&format!("Image: ({})", src)),
    }
    out.push_str("\n\n");
}

fn render_list(list: &Element, ordered: bool, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);

    for (index, item) in list
        .child_elements()
        .filter(|child| child.tag == "li")
        .enumerate()
    {
        out.push_str(&indent);
        if ordered {
            out.push_str(&format!("{}. ", index + 1));
        } else {
            out.push_str("- ");
        }

        let mut nested = Vec::new();
        for child in &item.children {
            match child {
                Node::Element(element) if element.tag == "ul" || element.tag == "ol" => {
                    nested.push(element)
                }
                other => render_node(other, depth, out),
            }
        }
        out.push('\n');

        for element in nested {
            render_list(element, element.tag == "ol", depth + 1, out);
        }
    }

    if depth == 0 {
        out.push('\n');
    }
}

fn render_table(table: &Element, out: &mut String) {
    for row in table_rows(table) {
        let cells: Vec<String> = row
            .child_elements()
            .filter(|cell| cell.tag == "td" || cell.tag == "th")
            .map(|cell| strip_line_breaks(cell.text().trim()))
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out.push('\n');
}

/// Rows of a table, looking through the row groups the HTML parser inserts.
pub(crate) fn table_rows(table: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.tag.as_str() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child.child_elements().filter(|row| row.tag == "tr"))
            }
            _ => {}
        }
    }
    rows
}

fn strip_line_breaks(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}
