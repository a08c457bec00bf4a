//! Error types for the configured rich-text facade
//!
//! The pure transforms never fail; malformed input degrades silently. These
//! errors only surface from configuration (bad palettes) and from the input
//! size cap enforced by [`crate::RichText`].

/// Error types for rich-text operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    /// Input exceeded the configured byte cap
    #[error("HTML input too large: {len} bytes. Maximum allowed: {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    /// A palette entry could not be parsed as a color
    #[error("Invalid palette color: {value:?}")]
    InvalidPaletteColor { value: String },

    /// A palette list was empty
    #[error("Palette `{which}` must contain at least one color")]
    EmptyPalette { which: &'static str },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),
}
