pub mod config;
pub mod error;
pub mod richtext;
pub mod utils;

pub use config::{RichTextConfig, RichTextConfigBuilder};
pub use error::RichTextError;
pub use richtext::{
    Palette, PasteInput, RenderOptions, RichText, SanitizeMode, SanitizeOptions,
    default_palette, detect_office_html, html_to_plain_text, normalize_pasted_html,
    render_safe_html, resolve_color, sanitize_html, sanitize_style,
};
pub use utils::{is_valid_url, safe_url};
