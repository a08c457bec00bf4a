//! CSS color parsing and palette quantization.
//!
//! Accepted syntaxes: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
//! `rgba(r,g,b,a)` and `transparent`. Named colors, `hsl()` and custom
//! properties are rejected rather than guessed.

use std::sync::LazyLock;

use regex::Regex;

static RGB_FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(([^)]+)\)$").expect("RGB_FUNC_RE: hardcoded regex is valid")
});

/// A parsed color with alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Encode as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared distance over `(r, g, b, a * 255)`.
    fn distance_sq(&self, other: &Rgba) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        let da = (self.a - other.a) * 255.0;
        dr * dr + dg * dg + db * db + da * da
    }
}

fn hex_pair(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

fn parse_hex(digits: &str) -> Option<Rgba> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut it = digits.chars().filter_map(|c| c.to_digit(16));
            let (r, g, b) = (it.next()?, it.next()?, it.next()?);
            // 0xf -> 0xff
            Some(Rgba {
                r: (r * 17) as u8,
                g: (g * 17) as u8,
                b: (b * 17) as u8,
                a: 1.0,
            })
        }
        6 | 8 => {
            let r = hex_pair(&digits[0..2])?;
            let g = hex_pair(&digits[2..4])?;
            let b = hex_pair(&digits[4..6])?;
            let a = if digits.len() == 8 {
                f64::from(hex_pair(&digits[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Rgba { r, g, b, a })
        }
        _ => None,
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_rgb_function(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 3 {
        return None;
    }

    let mut numbers = [0.0_f64; 4];
    numbers[3] = 1.0;
    for (slot, part) in numbers.iter_mut().zip(parts.iter().take(4)) {
        let n: f64 = part.parse().ok()?;
        if !n.is_finite() {
            return None;
        }
        *slot = n;
    }

    Some(Rgba {
        r: channel(numbers[0]),
        g: channel(numbers[1]),
        b: channel(numbers[2]),
        a: numbers[3].clamp(0.0, 1.0),
    })
}

/// Parse a CSS color value; `None` for anything outside the supported forms.
#[must_use]
pub fn parse_css_color(input: &str) -> Option<Rgba> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits);
    }

    if let Some(caps) = RGB_FUNC_RE.captures(s) {
        return parse_rgb_function(&caps[1]);
    }

    if s.eq_ignore_ascii_case("transparent") {
        return Some(Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        });
    }

    None
}

/// Resolve a raw CSS color against a palette.
///
/// Returns the palette entry nearest to the input (ties go to the earlier
/// entry), the exact color as `#rrggbb` when the palette is empty or has no
/// parseable entries, and `None` when the input itself is unparsable.
#[must_use]
pub fn resolve_color<S: AsRef<str>>(raw: &str, palette: &[S]) -> Option<String> {
    let color = parse_css_color(raw)?;

    let mut best: Option<(&str, f64)> = None;
    for entry in palette {
        let entry = entry.as_ref();
        let Some(candidate) = parse_css_color(entry) else {
            continue;
        };
        let d = color.distance_sq(&candidate);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((entry, d));
        }
    }

    Some(match best {
        Some((entry, _)) => entry.to_string(),
        None => color.to_hex(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::palette::{DEFAULT_HILITES, DEFAULT_TEXT_COLORS};

    #[test]
    fn test_parses_hex_forms() {
        assert_eq!(
            parse_css_color("#fff"),
            Some(Rgba { r: 255, g: 255, b: 255, a: 1.0 })
        );
        assert_eq!(
            parse_css_color("#102030"),
            Some(Rgba { r: 16, g: 32, b: 48, a: 1.0 })
        );
        let c = parse_css_color("#10203000").expect("8-digit hex");
        assert_eq!(c.a, 0.0);
        assert!(parse_css_color("#12345").is_none());
        assert!(parse_css_color("#ggg").is_none());
    }

    #[test]
    fn test_parses_rgb_functions() {
        assert_eq!(
            parse_css_color("rgb(300, -4, 12.6)"),
            Some(Rgba { r: 255, g: 0, b: 13, a: 1.0 })
        );
        let c = parse_css_color("RGBA(234,179,8,.28)").expect("rgba");
        assert!((c.a - 0.28).abs() < f64::EPSILON);
        assert!(parse_css_color("rgb(1,2)").is_none());
        assert!(parse_css_color("rgb(50%,0,0)").is_none());
    }

    #[test]
    fn test_rejects_unsupported_syntax() {
        for raw in ["red", "hsl(0, 100%, 50%)", "var(--x)", "windowtext", ""] {
            assert!(parse_css_color(raw).is_none(), "{raw} should be rejected");
        }
        assert_eq!(parse_css_color("transparent").map(|c| c.a), Some(0.0));
    }

    #[test]
    fn test_exact_hex_without_palette() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_color("rgba(1,2,3,0.5)", &empty).as_deref(), Some("#010203"));
        assert_eq!(resolve_color("nope", &empty), None);
    }

    #[test]
    fn test_nearest_palette_entry() {
        assert_eq!(resolve_color("#ff0000", DEFAULT_TEXT_COLORS).as_deref(), Some("#ef4444"));
        assert_eq!(resolve_color("#fff", DEFAULT_TEXT_COLORS).as_deref(), Some("#f8fafc"));
        assert_eq!(
            resolve_color("transparent", DEFAULT_HILITES).as_deref(),
            Some("rgba(0,0,0,0)")
        );
    }

    #[test]
    fn test_ties_go_to_first_entry() {
        let palette = ["#000000", "#020202"];
        assert_eq!(resolve_color("#010101", &palette).as_deref(), Some("#000000"));
    }

    #[test]
    fn test_palette_entries_resolve_to_themselves() {
        for entry in DEFAULT_TEXT_COLORS {
            assert_eq!(resolve_color(entry, DEFAULT_TEXT_COLORS).as_deref(), Some(*entry));
        }
        for entry in DEFAULT_HILITES {
            assert_eq!(resolve_color(entry, DEFAULT_HILITES).as_deref(), Some(*entry));
        }
    }
}
