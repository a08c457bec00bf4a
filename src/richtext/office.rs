//! Microsoft Office paste detection and textual pre-cleaning.
//!
//! Word and Outlook put thousands of `mso-*` declarations, conditional
//! comments and `<o:p>` tags into the clipboard. The sanitizer would drop all
//! of it anyway; stripping it textually first keeps the common case fast.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static OFFICE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\bclass=["']?Mso|\bmso-|urn:schemas-microsoft-com|<o:p>|<!--\[if\s+gte\s+mso|OfficeDocumentSettings"#,
    )
    .expect("OFFICE_MARKER_RE: hardcoded regex is valid")
});

// <!--[if gte mso 9]> ... <![endif]-->
static CONDITIONAL_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--\[if.*?\[endif\]-->")
        .expect("CONDITIONAL_COMMENT_RE: hardcoded regex is valid")
});

static STYLE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").expect("STYLE_BLOCK_RE: hardcoded regex is valid")
});

static META_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:meta|link)\b[^>]*>").expect("META_LINK_RE: hardcoded regex is valid")
});

static OFFICE_PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?o:p[^>]*>").expect("OFFICE_PARAGRAPH_RE: hardcoded regex is valid")
});

/// True if `html` carries Microsoft Office paste markers.
#[must_use]
pub fn detect_office_html(html: &str) -> bool {
    !html.is_empty() && OFFICE_MARKER_RE.is_match(html)
}

/// Strip conditional comments, `<style>`/`<meta>`/`<link>` and `<o:p>` tags.
#[must_use]
pub fn clean_office_html(html: &str) -> String {
    let result = Cow::Borrowed(html);
    let result = CONDITIONAL_COMMENT_RE.replace_all(&result, "");
    let result = STYLE_BLOCK_RE.replace_all(&result, "");
    let result = META_LINK_RE.replace_all(&result, "");
    let result = OFFICE_PARAGRAPH_RE.replace_all(&result, "");

    log::debug!(
        "Office cleanup reduced paste from {} to {} bytes",
        html.len(),
        result.len()
    );
    result.into_owned()
}
