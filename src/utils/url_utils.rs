//! URL helpers for anchors and images.
//!
//! Only absolute `http(s)` URLs survive sanitization. Bare `www.` hosts are
//! promoted to `https://`; every other scheme and every relative reference
//! is rejected.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static HTTP_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://").expect("HTTP_SCHEME_RE: hardcoded regex is valid")
});

static ANY_SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").expect("ANY_SCHEME_RE: hardcoded regex is valid")
});

/// Check if a URL is a parseable absolute `http`/`https` URL with a host
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Resolve an `href`/`src` value to a safe absolute URL.
///
/// Returns the trimmed input unchanged when it is a valid `http(s)` URL,
/// `https://` + input for bare `www.` hosts, and `None` otherwise. The raw
/// text is kept rather than the `url` crate's normalized form so repeated
/// sanitization leaves it byte-identical.
#[must_use]
pub fn safe_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if HTTP_SCHEME_RE.is_match(raw) {
        return is_valid_url(raw).then(|| raw.to_string());
    }

    // javascript:, data:, file:, mailto: ...
    if ANY_SCHEME_RE.is_match(raw) {
        return None;
    }

    if raw.len() > 4 && raw.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("www.")) {
        let promoted = format!("https://{raw}");
        return is_valid_url(&promoted).then_some(promoted);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(safe_url(" https://example.com/a ").as_deref(), Some("https://example.com/a"));
        assert_eq!(safe_url("HTTP://example.com").as_deref(), Some("HTTP://example.com"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url("JaVaScRiPt:alert(1)"), None);
        assert_eq!(safe_url("data:text/html;base64,xx"), None);
        assert_eq!(safe_url("ftp://x"), None);
        assert_eq!(safe_url("mailto:a@b.c"), None);
    }

    #[test]
    fn test_promotes_www() {
        assert_eq!(safe_url("www.example.com").as_deref(), Some("https://www.example.com"));
    }

    #[test]
    fn test_rejects_relative_and_empty() {
        assert_eq!(safe_url("/images/a.png"), None);
        assert_eq!(safe_url("//evil.example/x"), None);
        assert_eq!(safe_url("   "), None);
        assert_eq!(safe_url("https://"), None);
    }
}
