//! Fixed text and highlight palettes.
//!
//! Every `color` / `background-color` that survives sanitization is snapped to
//! one of these entries. The defaults match the site typography; callers may
//! supply their own lists through [`Palette::new`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::color::parse_css_color;
use crate::error::RichTextError;

/// Default text colors, in picker order.
pub const DEFAULT_TEXT_COLORS: &[&str] = &[
    "#f8fafc", "#94a3b8", "#22c55e", "#eab308", "#f97316", "#ef4444", "#3b82f6", "#8b5cf6",
    "#ec4899",
];

/// Default highlight colors. The first entry is the fully transparent
/// "no highlight" sentinel.
pub const DEFAULT_HILITES: &[&str] = &[
    "rgba(0,0,0,0)",
    "rgba(234,179,8,.28)",
    "rgba(34,197,94,.22)",
    "rgba(59,130,246,.22)",
    "rgba(139,92,246,.22)",
    "rgba(239,68,68,.22)",
];

static DEFAULT_PALETTE: LazyLock<Palette> = LazyLock::new(|| Palette {
    text_colors: DEFAULT_TEXT_COLORS.iter().map(|c| (*c).to_string()).collect(),
    hilites: DEFAULT_HILITES.iter().map(|c| (*c).to_string()).collect(),
});

/// Ordered text and highlight color lists.
///
/// Serializes as `{"textColors": [...], "hilites": [...]}` so the same value
/// can feed a UI color picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub text_colors: Vec<String>,
    pub hilites: Vec<String>,
}

impl Palette {
    /// Build a custom palette, rejecting empty lists and unparsable entries.
    pub fn new(text_colors: Vec<String>, hilites: Vec<String>) -> Result<Self, RichTextError> {
        let palette = Self {
            text_colors,
            hilites,
        };
        palette.validate()?;
        Ok(palette)
    }

    /// The process-wide default palette.
    #[must_use]
    pub fn builtin() -> &'static Palette {
        &DEFAULT_PALETTE
    }

    /// Check that both lists are non-empty and every entry parses.
    pub fn validate(&self) -> Result<(), RichTextError> {
        if self.text_colors.is_empty() {
            return Err(RichTextError::EmptyPalette {
                which: "textColors",
            });
        }
        if self.hilites.is_empty() {
            return Err(RichTextError::EmptyPalette { which: "hilites" });
        }
        if let Some(bad) = self
            .text_colors
            .iter()
            .chain(self.hilites.iter())
            .find(|c| parse_css_color(c).is_none())
        {
            return Err(RichTextError::InvalidPaletteColor { value: bad.clone() });
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Read-only snapshot of the default palette for color pickers.
#[must_use]
pub fn default_palette() -> Palette {
    Palette::builtin().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palette_is_valid() {
        assert!(Palette::builtin().validate().is_ok());
        assert_eq!(Palette::builtin().text_colors.len(), 9);
        assert_eq!(Palette::builtin().hilites[0], "rgba(0,0,0,0)");
    }

    #[test]
    fn test_rejects_bad_entries() {
        let err = Palette::new(vec!["#fff".into(), "red".into()], vec!["#000".into()])
            .expect_err("named colors are not parseable");
        assert!(err.to_string().contains("red"));

        assert!(Palette::new(vec![], vec!["#000".into()]).is_err());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(default_palette())?;
        assert!(json.get("textColors").is_some());
        assert!(json.get("hilites").is_some());
        Ok(())
    }
}
