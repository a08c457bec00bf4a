//! Shared constants for rich-text processing.

/// Maximum accepted HTML input size in bytes (10 MB).
///
/// Tree construction and the sanitizer walk are linear in node count, so a
/// byte cap is enough to bound the work per call.
pub const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Longest `@name` accepted by the mention scanner, in characters.
pub const MAX_MENTION_CHARS: usize = 24;

/// Class applied to anchors created by the linkifier.
pub const AUTO_LINK_CLASS: &str = "auto-link";

/// Class applied to mention spans.
pub const MENTION_CLASS: &str = "mention";

/// Wrapper class for horizontally scrollable tables.
pub const TABLE_WRAP_CLASS: &str = "ks-table-wrap";

/// Default class forced onto `<pre>` blocks.
pub const CODEBLOCK_CLASS: &str = "codeblock";

/// `target` forced onto every anchor.
pub const LINK_TARGET: &str = "_blank";

/// `rel` forced onto every anchor.
pub const LINK_REL: &str = "noopener noreferrer";
