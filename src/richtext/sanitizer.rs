//! Tree sanitizer: parse, filter, trim empty edges, serialize.
//!
//! Output is normalized until re-sanitizing it is a no-op. One filter pass
//! is usually enough; the extra verification pass catches the rare markup
//! whose serialization the HTML parser restructures (misnested headings,
//! unwrapped table captions and the like).

use super::allowlist::SanitizeMode;
use super::dom::{Node, body_of, parse_document, serialize_nodes};
use super::filter::{FilterContext, filter_children};
use super::palette::Palette;

/// Upper bound on filter passes spent reaching a fixed point.
const MAX_NORMALIZE_PASSES: usize = 4;

/// Blocks removed from the document edges when they are empty.
const EDGE_TRIM_TAGS: &[&str] = &["p", "div", "h1", "h2", "h3", "blockquote"];

/// Per-call sanitize options.
#[derive(Debug, Clone, Copy)]
pub struct SanitizeOptions<'a> {
    pub mode: SanitizeMode,
    pub palette: &'a Palette,
}

impl SanitizeOptions<'static> {
    #[must_use]
    pub fn new(mode: SanitizeMode) -> Self {
        Self {
            mode,
            palette: Palette::builtin(),
        }
    }

    #[must_use]
    pub fn article() -> Self {
        Self::new(SanitizeMode::Article)
    }

    #[must_use]
    pub fn comment() -> Self {
        Self::new(SanitizeMode::Comment)
    }
}

impl<'a> SanitizeOptions<'a> {
    /// Same mode, different palette.
    #[must_use]
    pub fn with_palette<'b>(self, palette: &'b Palette) -> SanitizeOptions<'b> {
        SanitizeOptions {
            mode: self.mode,
            palette,
        }
    }
}

impl Default for SanitizeOptions<'static> {
    fn default() -> Self {
        Self::comment()
    }
}

/// Sanitized tree together with its serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub nodes: Vec<Node>,
    pub html: String,
}

/// Reduce untrusted HTML to the allowlisted subset.
///
/// Empty or whitespace-only input yields an empty string without invoking
/// the parser.
#[must_use]
pub fn sanitize_html(html: &str, options: &SanitizeOptions<'_>) -> String {
    sanitize_fragment(html, options).html
}

/// Sanitize and keep the tree, for callers that transform it further.
#[must_use]
pub fn sanitize_fragment(html: &str, options: &SanitizeOptions<'_>) -> Sanitized {
    let mut nodes = sanitize_pass(html, options);
    let mut serialized = serialize_nodes(&nodes);

    for _ in 1..MAX_NORMALIZE_PASSES {
        if serialized.is_empty() {
            break;
        }
        let next = sanitize_pass(&serialized, options);
        let next_serialized = serialize_nodes(&next);
        if next_serialized == serialized {
            return Sanitized {
                nodes: next,
                html: serialized,
            };
        }
        log::debug!("Sanitized output changed on re-parse; normalizing again");
        nodes = next;
        serialized = next_serialized;
    }

    if !serialized.is_empty() {
        log::warn!("Sanitizer did not reach a fixed point after {MAX_NORMALIZE_PASSES} passes");
    }
    Sanitized {
        nodes,
        html: serialized,
    }
}

fn sanitize_pass(html: &str, options: &SanitizeOptions<'_>) -> Vec<Node> {
    let html = html.trim();
    if html.is_empty() {
        return Vec::new();
    }

    let document = parse_document(html);
    let Some(body) = body_of(&document) else {
        log::debug!("Parsed document has no <body>; nothing to keep");
        return Vec::new();
    };

    let ctx = FilterContext {
        mode: options.mode,
        palette: options.palette,
    };
    let mut nodes = filter_children(*body, &ctx, 0);
    trim_empty_edges(&mut nodes);
    nodes
}

fn is_trimmable_edge(node: &Node) -> bool {
    match node {
        Node::Text(t) => t.trim().is_empty(),
        Node::Element(el) => EDGE_TRIM_TAGS.contains(&el.tag.as_str()) && el.is_blank(),
    }
}

/// Remove empty blocks and whitespace from both ends of the root.
fn trim_empty_edges(nodes: &mut Vec<Node>) {
    loop {
        let before = nodes.len();

        while nodes.first().is_some_and(is_trimmable_edge) {
            nodes.remove(0);
        }
        while nodes.last().is_some_and(is_trimmable_edge) {
            nodes.pop();
        }

        if let Some(Node::Text(t)) = nodes.first_mut() {
            let trimmed = t.trim_start();
            if trimmed.len() != t.len() {
                *t = trimmed.to_string();
            }
        }
        if let Some(Node::Text(t)) = nodes.last_mut() {
            let trimmed_len = t.trim_end().len();
            t.truncate(trimmed_len);
        }

        if nodes.len() == before {
            break;
        }
    }
}
