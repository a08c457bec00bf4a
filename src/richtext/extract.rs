//! Plain-text extraction for excerpts and search indexing.

use std::sync::LazyLock;

use ego_tree::iter::Edge;
use regex::Regex;
use scraper::node::Node as ParsedNode;

use super::dom::{body_of, parse_document};

static HORIZONTAL_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\x0C]+").expect("HORIZONTAL_SPACE_RE: hardcoded regex is valid")
});

static SPACE_AROUND_NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" ?\n ?").expect("SPACE_AROUND_NEWLINE_RE: hardcoded regex is valid")
});

static EXCESS_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES_RE: hardcoded regex is valid"));

/// Elements separated from their neighbours by a blank line.
const PARAGRAPH_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "ul", "ol", "table",
    "figure", "figcaption", "hr",
];

/// Elements that end a line.
const LINE_TAGS: &[&str] = &["li", "tr", "br"];

/// Elements whose text is never human-readable content.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript", "title", "head"];

/// Derive normalized plain text from (sanitized) HTML.
#[must_use]
pub fn html_to_plain_text(html: &str) -> String {
    let html = html.trim();
    if html.is_empty() {
        return String::new();
    }

    let document = parse_document(html);
    let Some(body) = body_of(&document) else {
        return String::new();
    };

    let mut raw = String::with_capacity(html.len());
    let mut hidden_depth = 0usize;

    for edge in body.traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                ParsedNode::Text(text) if hidden_depth == 0 => raw.push_str(text),
                ParsedNode::Element(el) => {
                    let tag = el.name();
                    if hidden_depth > 0 || HIDDEN_TAGS.contains(&tag) {
                        hidden_depth += 1;
                    } else if PARAGRAPH_TAGS.contains(&tag) {
                        raw.push_str("\n\n");
                    } else if tag == "td" || tag == "th" {
                        raw.push(' ');
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let ParsedNode::Element(el) = node.value() {
                    let tag = el.name();
                    if hidden_depth > 0 {
                        hidden_depth -= 1;
                    } else if PARAGRAPH_TAGS.contains(&tag) {
                        raw.push_str("\n\n");
                    } else if LINE_TAGS.contains(&tag) {
                        raw.push('\n');
                    }
                }
            }
        }
    }

    normalize_text(&raw)
}

fn normalize_text(raw: &str) -> String {
    let text = raw
        .replace('\u{a0}', " ")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let text = HORIZONTAL_SPACE_RE.replace_all(&text, " ");
    let text = SPACE_AROUND_NEWLINE_RE.replace_all(&text, "\n");
    let text = EXCESS_NEWLINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_blank_line_separated() {
        assert_eq!(html_to_plain_text("<p>Line1</p><p>Line2</p>"), "Line1\n\nLine2");
    }

    #[test]
    fn test_inline_markup_and_entities() {
        assert_eq!(
            html_to_plain_text("<p>a&nbsp;&nbsp;<b>bold</b>\t &amp; <i>it</i></p>"),
            "a bold & it"
        );
    }

    #[test]
    fn test_lists_and_breaks() {
        assert_eq!(
            html_to_plain_text("<ul><li>one</li><li>two</li></ul><p>x<br>y</p>"),
            "one\ntwo\n\nx\ny"
        );
    }

    #[test]
    fn test_skips_script_text() {
        assert_eq!(html_to_plain_text("<p>a</p><script>var x = 1;</script>"), "a");
    }

    #[test]
    fn test_empty() {
        assert_eq!(html_to_plain_text("  "), "");
        assert_eq!(html_to_plain_text("<p><br></p>"), "");
    }
}
