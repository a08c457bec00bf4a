//! Owned document tree produced by the sanitizer, and its HTML serializer.
//!
//! Parsing is delegated to `scraper` (html5ever's browser-grade tree
//! builder); the sanitizer reads that tree and builds a fresh [`Node`] tree
//! which is the only thing ever serialized.

use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::{ElementRef, Html};

use super::allowlist::MEDIA_TAGS;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Ordered, unique attribute names.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|t| t == class))
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        for child in &self.children {
            child.collect_text(&mut buf);
        }
        buf
    }

    /// True if any descendant is an image, table, code block, list or figure.
    #[must_use]
    pub fn contains_media(&self) -> bool {
        self.children.iter().any(|child| match child {
            Node::Element(el) => MEDIA_TAGS.contains(&el.tag.as_str()) || el.contains_media(),
            Node::Text(_) => false,
        })
    }

    /// No visible text (after folding `&nbsp;`) and no media descendants.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text_content().replace('\u{a0}', " ").trim().is_empty() && !self.contains_media()
    }
}

impl Node {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    #[must_use]
    pub fn is_whitespace_text(&self) -> bool {
        matches!(self, Node::Text(t) if t.trim().is_empty())
    }

    fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Text(t) => buf.push_str(t),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(buf);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// Parse `html` as a full document, the way a browser's `DOMParser` would.
#[must_use]
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// The `<body>` element of a parsed document, if the parser produced one.
#[must_use]
pub fn body_of(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
}

/// Serialize a node list to HTML.
#[must_use]
pub fn serialize_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&encode_double_quoted_attribute(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                return;
            }

            // The parser drops one newline right after `<pre>`.
            if el.tag == "pre"
                && let Some(Node::Text(first)) = el.children.first()
                && first.starts_with('\n')
            {
                out.push('\n');
            }

            for child in &el.children {
                write_node(child, out);
            }

            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}
