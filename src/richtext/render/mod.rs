//! Read-time rendering enhancements.
//!
//! The stored HTML is re-sanitized, then tables get a scroll wrapper and
//! bare URLs / `@mentions` in text are turned into links and mention spans.
//! The result is for display only and must never be written back.

pub mod scanner;

use serde::{Deserialize, Serialize};

use super::allowlist::SanitizeMode;
use super::dom::{Element, Node, serialize_nodes};
use super::sanitizer::{SanitizeOptions, sanitize_fragment};
use crate::utils::{AUTO_LINK_CLASS, LINK_REL, LINK_TARGET, MENTION_CLASS, TABLE_WRAP_CLASS, safe_url};
use scanner::{SpanKind, scan};

/// Text inside these elements is never linkified or mentionified.
const NO_ENHANCE_TAGS: &[&str] = &["a", "code", "pre"];

/// Display-time options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub linkify: bool,
    pub mentionify: bool,
    pub mode: SanitizeMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            linkify: true,
            mentionify: false,
            mode: SanitizeMode::default(),
        }
    }
}

/// Re-sanitize `html` and apply display enhancements.
#[must_use]
pub fn render_safe_html(html: &str, options: &RenderOptions) -> String {
    render_safe_html_with(html, options, &SanitizeOptions::new(options.mode))
}

/// Like [`render_safe_html`] with explicit sanitize options (custom palette).
#[must_use]
pub fn render_safe_html_with(
    html: &str,
    options: &RenderOptions,
    sanitize: &SanitizeOptions<'_>,
) -> String {
    let mut nodes = sanitize_fragment(html, sanitize).nodes;
    if nodes.is_empty() {
        return String::new();
    }
    wrap_tables(&mut nodes, false);
    if options.linkify || options.mentionify {
        enhance_text(&mut nodes, options);
    }
    serialize_nodes(&nodes)
}

/// Wrap every table not already inside the scroll wrapper.
fn wrap_tables(nodes: &mut [Node], parent_is_wrapper: bool) {
    for node in nodes.iter_mut() {
        let Node::Element(el) = node else {
            continue;
        };
        let is_wrapper = el.tag == "div" && el.has_class(TABLE_WRAP_CLASS);
        wrap_tables(&mut el.children, is_wrapper);

        if el.tag == "table" && !parent_is_wrapper {
            let table = std::mem::replace(el, Element::new("div"));
            *el = Element::new("div")
                .with_attr("class", TABLE_WRAP_CLASS)
                .with_children(vec![table.into()]);
        }
    }
}

fn enhance_text(nodes: &mut Vec<Node>, options: &RenderOptions) {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match node {
            Node::Text(text) if !text.trim().is_empty() => {
                out.extend(enhance_run(&text, options));
            }
            Node::Element(mut el) => {
                if !NO_ENHANCE_TAGS.contains(&el.tag.as_str()) {
                    enhance_text(&mut el.children, options);
                }
                out.push(el.into());
            }
            other => out.push(other),
        }
    }
    *nodes = out;
}

fn enhance_run(text: &str, options: &RenderOptions) -> Vec<Node> {
    let spans = scan(text, options.linkify, options.mentionify);
    if spans.is_empty() {
        return vec![Node::text(text)];
    }

    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;
    for span in spans {
        if span.start > last {
            out.push(Node::text(&text[last..span.start]));
        }
        let token = &text[span.start..span.end];
        match span.kind {
            SpanKind::Url => match safe_url(token) {
                Some(href) => out.push(auto_link(href, token)),
                None => out.push(Node::text(token)),
            },
            SpanKind::Mention => out.push(
                Element::new("span")
                    .with_attr("class", MENTION_CLASS)
                    .with_children(vec![Node::text(token)])
                    .into(),
            ),
        }
        last = span.end;
    }
    if last < text.len() {
        out.push(Node::text(&text[last..]));
    }
    out
}

fn auto_link(href: String, label: &str) -> Node {
    Element::new("a")
        .with_attr("class", AUTO_LINK_CLASS)
        .with_attr("href", href)
        .with_attr("target", LINK_TARGET)
        .with_attr("rel", LINK_REL)
        .with_children(vec![Node::text(label)])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentions() -> RenderOptions {
        RenderOptions {
            mentionify: true,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_linkifies_with_trailing_punctuation_outside() {
        let out = render_safe_html("see https://example.com/a).", &RenderOptions::default());
        assert_eq!(
            out,
            r#"see <a class="auto-link" href="https://example.com/a" target="_blank" rel="noopener noreferrer">https://example.com/a</a>)."#
        );
    }

    #[test]
    fn test_www_links_get_https() {
        let out = render_safe_html("<p>www.example.com</p>", &RenderOptions::default());
        assert!(out.contains(r#"href="https://www.example.com""#));
        assert!(out.contains(">www.example.com</a>"));
    }

    #[test]
    fn test_skips_existing_links_and_code() {
        let html = r#"<p><a href="https://a.test">https://b.test</a> <code>https://c.test</code></p><pre>https://d.test</pre>"#;
        let out = render_safe_html(html, &RenderOptions::default());
        assert!(!out.contains("auto-link"));
    }

    #[test]
    fn test_mentions_are_opt_in() {
        let html = "ping @Alice now";
        assert_eq!(render_safe_html(html, &RenderOptions::default()), "ping @Alice now");
        assert_eq!(
            render_safe_html(html, &mentions()),
            r#"ping <span class="mention">@Alice</span> now"#
        );
        assert_eq!(render_safe_html("contact me@x.com", &mentions()), "contact me@x.com");
    }

    #[test]
    fn test_wraps_tables_once() {
        let out = render_safe_html("<table><tr><td>a</td></tr></table>", &RenderOptions::default());
        assert!(out.starts_with(r#"<div class="ks-table-wrap"><table>"#));

        let again = render_safe_html(&out, &RenderOptions::default());
        assert_eq!(again.matches("ks-table-wrap").count(), 1);
    }

    #[test]
    fn test_resanitizes_input() {
        let out = render_safe_html("<script>alert(1)</script><p>ok</p>", &RenderOptions::default());
        assert_eq!(out, "<p>ok</p>");
    }
}
