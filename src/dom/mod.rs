//! Owned DOM used for link rewriting, fragment serialization and text
//! rendering.
//!
//! Parsing and CSS selection are left to `scraper`; a selected subtree is
//! copied into [`Node`] values so it can be mutated and walked without
//! borrowing the parsed document.

use std::collections::BTreeMap;

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Html};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text is serialized without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated text of every descendant text node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Copies `element` and its whole subtree out of a parsed document.
    pub fn from_element_ref(element: ElementRef<'_>) -> Self {
        let value = element.value();
        Self {
            tag: value.name().to_string(),
            attributes: value
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children: children_of(element),
        }
    }

    /// Serialized markup of the children, without the element's own tag.
    pub fn inner_html(&self) -> String {
        serialize(&self.children)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Node::Element(element) => element.text(),
            Node::Text(text) => text.clone(),
        }
    }
}

/// Converts the children of a parsed element, keeping only element and text
/// nodes.
pub fn children_of(element: ElementRef<'_>) -> Vec<Node> {
    element
        .children()
        .filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(Node::Text(String::from(&**text))),
            scraper::Node::Element(_) => {
                ElementRef::wrap(child).map(|e| Node::Element(Element::from_element_ref(e)))
            }
            _ => None,
        })
        .collect()
}

/// Parses an HTML fragment into its top-level nodes.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);
    children_of(fragment.root_element())
}

/// Serializes nodes back into HTML markup.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, false, &mut out);
    }
    out
}

/// Applies `f` to every element in document order, parents before children.
pub fn walk_elements_mut(nodes: &mut [Node], f: &mut impl FnMut(&mut Element)) {
    for node in nodes {
        if let Node::Element(element) = node {
            f(element);
            walk_elements_mut(&mut element.children, f);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn write_node(node: &Node, raw_text: bool, out: &mut String) {
    match node {
        Node::Text(text) if raw_text => out.push_str(text),
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&encode_double_quoted_attribute(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                return;
            }

            let raw = RAW_TEXT_ELEMENTS.contains(&element.tag.as_str());
            for child in &element.children {
                write_node(child, raw, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}
