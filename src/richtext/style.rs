//! Inline `style` attribute filtering.
//!
//! Only `color`, `background-color` and `text-align` can survive. Everything
//! else (`position`, `content`, `behavior`, `-moz-binding`, custom
//! properties, `mso-*` noise) is dropped without complaint.

use super::color::resolve_color;
use super::palette::Palette;

const TEXT_ALIGN_VALUES: &[&str] = &["left", "center", "right", "justify"];

/// Which declarations an element may keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRules {
    pub allow_color: bool,
    pub allow_highlight: bool,
    pub allow_align: bool,
}

impl StyleRules {
    /// Color and highlight only; used for inline elements.
    pub const INLINE: StyleRules = StyleRules {
        allow_color: true,
        allow_highlight: true,
        allow_align: false,
    };

    /// Color, highlight and alignment; used for block elements.
    pub const BLOCK: StyleRules = StyleRules {
        allow_color: true,
        allow_highlight: true,
        allow_align: true,
    };
}

/// Filter a raw style string down to the allowed declarations.
///
/// Output order is always `color`, `background-color`, `text-align`
/// regardless of input order. When a property repeats, the last valid value
/// wins, as in the CSS cascade.
#[must_use]
pub fn sanitize_style(raw: &str, rules: StyleRules, palette: &Palette) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let mut color: Option<String> = None;
    let mut highlight: Option<String> = None;
    let mut align: Option<&'static str> = None;

    for decl in raw.split(';').map(str::trim).filter(|d| !d.is_empty()) {
        let Some((prop, value)) = decl.split_once(':') else {
            continue;
        };
        let prop = prop.trim().to_ascii_lowercase();
        let value = value.trim();
        if prop.is_empty() || value.is_empty() {
            continue;
        }

        match prop.as_str() {
            "color" if rules.allow_color => {
                if let Some(c) = resolve_color(value, &palette.text_colors) {
                    color = Some(c);
                }
            }
            "background-color" if rules.allow_highlight => {
                if let Some(c) = resolve_color(value, &palette.hilites) {
                    highlight = Some(c);
                }
            }
            "text-align" if rules.allow_align => {
                let value = value.to_ascii_lowercase();
                if let Some(a) = TEXT_ALIGN_VALUES.iter().find(|a| **a == value) {
                    align = Some(*a);
                }
            }
            _ => {}
        }
    }

    let mut out: Vec<String> = Vec::with_capacity(3);
    if let Some(c) = color {
        out.push(format!("color:{c}"));
    }
    if let Some(c) = highlight {
        out.push(format!("background-color:{c}"));
    }
    if let Some(a) = align {
        out.push(format!("text-align:{a}"));
    }
    out.join(";")
}
