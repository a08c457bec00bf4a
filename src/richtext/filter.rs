//! Per-node allowlist filter.
//!
//! Walks the parser's tree depth-first. Children are filtered before being
//! attached to their filtered parent, so every decision about an element
//! (placeholder insertion, `div` retagging) sees already-clean children.

use ego_tree::NodeRef;
use regex::Regex;
use scraper::node::Node as ParsedNode;
use std::sync::LazyLock;

use super::allowlist::{
    P_CLOSING_TAGS, PLACEHOLDER_TAGS, SanitizeMode, filter_class, is_allowed_tag, is_block_tag,
    is_dropped_tag,
};
use super::dom::{Element, Node};
use super::palette::Palette;
use super::style::{StyleRules, sanitize_style};
use crate::utils::{CODEBLOCK_CLASS, LINK_REL, LINK_TARGET, safe_url};

static SPAN_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("SPAN_COUNT_RE: hardcoded regex is valid"));

/// Nesting depth past which a subtree is flattened to its text.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Result of filtering one parsed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered {
    /// Emit this node.
    Keep(Node),
    /// Drop the tag but splice these (already clean) children in its place.
    Unwrap(Vec<Node>),
    /// Drop the node and its subtree.
    Drop,
}

impl Filtered {
    fn append_to(self, out: &mut Vec<Node>) {
        match self {
            Filtered::Keep(node) => out.push(node),
            Filtered::Unwrap(nodes) => out.extend(nodes),
            Filtered::Drop => {}
        }
    }
}

/// Per-call filter settings.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub mode: SanitizeMode,
    pub palette: &'a Palette,
}

/// Filter every child of `parent` and collect the survivors.
pub fn filter_children(
    parent: NodeRef<'_, ParsedNode>,
    ctx: &FilterContext<'_>,
    depth: usize,
) -> Vec<Node> {
    let mut out = Vec::new();
    for child in parent.children() {
        filter_node(child, ctx, depth).append_to(&mut out);
    }
    out
}

/// Decide what to do with a single parsed node.
pub fn filter_node(node: NodeRef<'_, ParsedNode>, ctx: &FilterContext<'_>, depth: usize) -> Filtered {
    match node.value() {
        ParsedNode::Text(text) => Filtered::Keep(Node::text(&**text)),
        ParsedNode::Element(el) => {
            let tag = el.name();
            if is_dropped_tag(tag) {
                log::debug!("Dropping <{tag}> subtree");
                return Filtered::Drop;
            }
            if depth >= MAX_NESTING_DEPTH {
                return flatten_to_text(node);
            }
            filter_element(node, el, ctx, depth)
        }
        // Comments, doctypes, processing instructions
        _ => Filtered::Drop,
    }
}

fn flatten_to_text(node: NodeRef<'_, ParsedNode>) -> Filtered {
    let mut text = String::new();
    let mut skip_depth = 0usize;
    for edge in node.traverse() {
        match edge {
            ego_tree::iter::Edge::Open(n) => match n.value() {
                ParsedNode::Element(el) if skip_depth > 0 || is_dropped_tag(el.name()) => {
                    skip_depth += 1;
                }
                ParsedNode::Text(t) if skip_depth == 0 => text.push_str(t),
                _ => {}
            },
            ego_tree::iter::Edge::Close(n) => {
                if matches!(n.value(), ParsedNode::Element(_)) && skip_depth > 0 {
                    skip_depth -= 1;
                }
            }
        }
    }
    if text.is_empty() {
        Filtered::Drop
    } else {
        Filtered::Unwrap(vec![Node::Text(text)])
    }
}

fn filter_element(
    node: NodeRef<'_, ParsedNode>,
    el: &scraper::node::Element,
    ctx: &FilterContext<'_>,
    depth: usize,
) -> Filtered {
    let source_tag = match el.name() {
        "tfoot" => "tbody",
        other => other,
    };

    if !is_allowed_tag(source_tag) {
        return Filtered::Unwrap(filter_children(node, ctx, depth + 1));
    }

    let raw_class = el.attr("class").unwrap_or_default();
    let raw_style = el.attr("style").unwrap_or_default();

    let mut tag = ctx.mode.heading_tag(source_tag);
    let mut class = filter_class(tag, raw_class);
    let mut retagged_div = false;

    if tag == "div" && class.is_empty() {
        tag = "p";
        retagged_div = true;
        class = filter_class(tag, raw_class);
    }

    let rules = if is_block_tag(tag) {
        StyleRules::BLOCK
    } else {
        StyleRules::INLINE
    };
    let style = sanitize_style(raw_style, rules, ctx.palette);

    match tag {
        "span" if class.is_empty() && style.is_empty() => {
            return Filtered::Unwrap(filter_children(node, ctx, depth + 1));
        }
        "img" => return filter_image(el),
        "a" => {
            if el.attr("href").and_then(safe_url).is_none() {
                return Filtered::Unwrap(filter_children(node, ctx, depth + 1));
            }
        }
        _ => {}
    }

    let mut out = Element::new(tag);
    if tag == "pre" && class.is_empty() {
        class = CODEBLOCK_CLASS.to_string();
    }
    if !class.is_empty() {
        out.set_attr("class", class);
    }
    if !style.is_empty() {
        out.set_attr("style", style);
    }

    match tag {
        "a" => {
            if let Some(href) = el.attr("href").and_then(safe_url) {
                out.set_attr("href", href);
            }
            out.set_attr("target", LINK_TARGET);
            out.set_attr("rel", LINK_REL);
        }
        "th" | "td" => {
            for name in ["colspan", "rowspan"] {
                if let Some(v) = el.attr(name)
                    && SPAN_COUNT_RE.is_match(v)
                {
                    out.set_attr(name, v);
                }
            }
        }
        _ => {}
    }

    out.children = filter_children(node, ctx, depth + 1);

    // A `<p>` holding blocks would be split apart on the next parse.
    if retagged_div && out.children.iter().any(is_p_closing) {
        return Filtered::Unwrap(out.children);
    }

    if PLACEHOLDER_TAGS.contains(&tag) && out.is_blank() {
        out.children = vec![Element::new("br").into()];
    }

    Filtered::Keep(out.into())
}

fn filter_image(el: &scraper::node::Element) -> Filtered {
    let Some(src) = el.attr("src").and_then(safe_url) else {
        return Filtered::Drop;
    };
    let mut img = Element::new("img").with_attr("src", src);
    let alt = el.attr("alt").unwrap_or_default().trim();
    if !alt.is_empty() {
        img.set_attr("alt", alt);
    }
    let class = filter_class("img", el.attr("class").unwrap_or_default());
    if !class.is_empty() {
        img.set_attr("class", class);
    }
    Filtered::Keep(img.into())
}

fn is_p_closing(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| P_CLOSING_TAGS.contains(&el.tag.as_str()))
}
