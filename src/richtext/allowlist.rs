//! Static allowlist configuration: tags, block tags and per-tag classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Element tags that may appear in sanitized output.
pub const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "b", "strong", "i", "em", "u", "s", "span", "mark", "a", "ul", "ol", "li", "h1",
    "h2", "h3", "blockquote", "pre", "code", "hr", "table", "thead", "tbody", "tr", "th", "td",
    "figure", "figcaption", "img", "div", "sup", "sub",
];

/// Layout blocks: may carry `text-align`.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "blockquote", "pre", "ul", "ol", "table", "figure", "div",
];

/// Blocks that get a `<br>` placeholder when left empty.
pub const PLACEHOLDER_TAGS: &[&str] = &["p", "h1", "h2", "h3", "blockquote"];

/// Descendants that make a block non-empty even without text.
pub const MEDIA_TAGS: &[&str] = &["img", "table", "pre", "ul", "ol", "figure"];

/// Tags dropped together with their whole subtree.
pub const DROPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "svg", "math", "form", "input", "textarea",
    "button", "select", "option", "head", "title", "meta", "link", "noscript", "template",
];

/// Tags whose start tag implicitly closes an open `<p>` when re-parsed.
pub const P_CLOSING_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "blockquote", "pre", "ul", "ol", "li", "table", "figure",
    "figcaption", "hr",
];

const FONT_SIZE_CLASSES: &[&str] = &["ks-fs-12", "ks-fs-14", "ks-fs-18", "ks-fs-20"];

/// Class tokens a tag may keep. Tags not listed keep no classes.
#[must_use]
pub fn allowed_classes(tag: &str) -> &'static [&'static str] {
    match tag {
        "pre" => &["codeblock"],
        "figure" => &["ks-figure"],
        "a" => &["file-chip", "ks-media-item", "auto-link"],
        "div" => &["ks-media-grid", "ks-table-wrap", "article-video"],
        "span" => &["mention", "ks-fs-12", "ks-fs-14", "ks-fs-18", "ks-fs-20"],
        "img" => &["article-media"],
        "p" | "h1" | "h2" | "h3" | "blockquote" | "li" => FONT_SIZE_CLASSES,
        _ => &[],
    }
}

#[must_use]
pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

#[must_use]
pub fn is_dropped_tag(tag: &str) -> bool {
    DROPPED_TAGS.contains(&tag)
}

/// Keep only the class tokens allowed for `tag`, in input order, without
/// duplicates.
#[must_use]
pub fn filter_class(tag: &str, class_value: &str) -> String {
    let allow = allowed_classes(tag);
    if allow.is_empty() {
        return String::new();
    }
    let mut kept: Vec<&str> = Vec::new();
    for token in class_value.split_ascii_whitespace() {
        if allow.contains(&token) && !kept.contains(&token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

/// Sanitize mode. Article mode allows `h1`; comment mode demotes it to `h2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    Article,
    #[default]
    Comment,
}

impl SanitizeMode {
    /// Map a heading tag to the one this mode emits.
    #[must_use]
    pub fn heading_tag<'a>(&self, tag: &'a str) -> &'a str {
        match (self, tag) {
            (SanitizeMode::Comment, "h1") => "h2",
            _ => tag,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SanitizeMode::Article => "article",
            SanitizeMode::Comment => "comment",
        }
    }
}

impl fmt::Display for SanitizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanitizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Ok(SanitizeMode::Article),
            "comment" => Ok(SanitizeMode::Comment),
            other => Err(format!("unknown sanitize mode `{other}` (expected article|comment)")),
        }
    }
}
