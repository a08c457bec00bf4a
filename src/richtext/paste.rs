//! Paste normalizer: the single entry point for clipboard and drop payloads.

use serde::{Deserialize, Serialize};

use super::allowlist::SanitizeMode;
use super::office::{clean_office_html, detect_office_html};
use super::sanitizer::{SanitizeOptions, sanitize_html};
use super::text_promotion::promote_plain_text;

/// Clipboard payload as offered by the editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteInput {
    /// `text/html` flavor, if any
    #[serde(default)]
    pub html: Option<String>,
    /// `text/plain` flavor, if any
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mode: SanitizeMode,
}

impl PasteInput {
    #[must_use]
    pub fn from_html(html: impl Into<String>, mode: SanitizeMode) -> Self {
        Self {
            html: Some(html.into()),
            text: None,
            mode,
        }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>, mode: SanitizeMode) -> Self {
        Self {
            html: None,
            text: Some(text.into()),
            mode,
        }
    }
}

/// Normalize a paste into sanitized HTML using the default palette.
///
/// An empty result means "nothing to save".
#[must_use]
pub fn normalize_pasted_html(input: &PasteInput) -> String {
    normalize_pasted_html_with(input, &SanitizeOptions::new(input.mode))
}

/// Normalize a paste with explicit options; `options.mode` wins over
/// `input.mode`.
#[must_use]
pub fn normalize_pasted_html_with(input: &PasteInput, options: &SanitizeOptions<'_>) -> String {
    let html = input.html.as_deref().map(str::trim).unwrap_or_default();
    if !html.is_empty() {
        if detect_office_html(html) {
            log::debug!("Office markup detected in paste; pre-cleaning");
            return sanitize_html(&clean_office_html(html), options);
        }
        return sanitize_html(html, options);
    }

    let text = input.text.as_deref().map(str::trim).unwrap_or_default();
    if !text.is_empty() {
        return sanitize_html(&promote_plain_text(text), options);
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_wins_over_text() {
        let input = PasteInput {
            html: Some("<b>rich</b>".into()),
            text: Some("plain".into()),
            mode: SanitizeMode::Comment,
        };
        assert_eq!(normalize_pasted_html(&input), "<b>rich</b>");
    }

    #[test]
    fn test_blank_html_falls_back_to_text() {
        let input = PasteInput {
            html: Some("   ".into()),
            text: Some("- a\n- b".into()),
            mode: SanitizeMode::Comment,
        };
        assert_eq!(normalize_pasted_html(&input), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_nothing_to_paste() {
        assert_eq!(normalize_pasted_html(&PasteInput::default()), "");
    }

    #[test]
    fn test_office_paste() {
        let html = r#"<!--[if gte mso 9]><xml>junk</xml><![endif]--><p class="MsoNormal" style="mso-margin-top-alt:auto">Hi<o:p></o:p></p>"#;
        let out = normalize_pasted_html(&PasteInput::from_html(html, SanitizeMode::Article));
        assert_eq!(out, "<p>Hi</p>");
    }
}
