//! Rich-text HTML pipeline
//!
//! Untrusted HTML flows through three entry points:
//!
//! - [`sanitize_html`]: allowlist filter plus structural normalization, run
//!   before storing user content.
//! - [`normalize_pasted_html`]: clipboard payloads (Office HTML, plain text)
//!   funneled into the sanitizer.
//! - [`render_safe_html`]: sanitize then enhance for display (auto-links,
//!   mentions, scrollable tables).
//!
//! [`html_to_plain_text`] extracts readable text for previews and search.

pub mod allowlist;
pub mod color;
pub mod dom;
pub mod engine;
pub mod extract;
pub mod filter;
pub mod office;
pub mod palette;
pub mod paste;
pub mod render;
pub mod sanitizer;
pub mod style;
pub mod text_promotion;

pub use allowlist::SanitizeMode;
pub use color::{Rgba, parse_css_color, resolve_color};
pub use engine::RichText;
pub use extract::html_to_plain_text;
pub use office::{clean_office_html, detect_office_html};
pub use palette::{DEFAULT_HILITES, DEFAULT_TEXT_COLORS, Palette, default_palette};
pub use paste::{PasteInput, normalize_pasted_html, normalize_pasted_html_with};
pub use render::{RenderOptions, render_safe_html, render_safe_html_with};
pub use sanitizer::{SanitizeOptions, Sanitized, sanitize_fragment, sanitize_html};
pub use style::{StyleRules, sanitize_style};
pub use text_promotion::promote_plain_text;
