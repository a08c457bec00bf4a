//! Configured facade over the pure transforms.
//!
//! Holds a validated [`RichTextConfig`] and applies its input-size cap and
//! palette to every call. The engine is immutable after construction and can
//! be shared across threads freely.

use super::allowlist::SanitizeMode;
use super::extract::html_to_plain_text;
use super::palette::Palette;
use super::paste::{PasteInput, normalize_pasted_html_with};
use super::render::{RenderOptions, render_safe_html_with};
use super::sanitizer::{SanitizeOptions, sanitize_html};
use crate::config::RichTextConfig;
use crate::error::RichTextError;

#[derive(Debug, Clone)]
pub struct RichText {
    config: RichTextConfig,
}

impl RichText {
    /// Validate `config` and build an engine.
    pub fn new(config: RichTextConfig) -> Result<Self, RichTextError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &RichTextConfig {
        &self.config
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    fn check_size(&self, input: &str) -> Result<(), RichTextError> {
        if input.len() > self.config.max_input_bytes {
            log::warn!(
                "Rejecting {} byte input (limit {})",
                input.len(),
                self.config.max_input_bytes
            );
            return Err(RichTextError::InputTooLarge {
                len: input.len(),
                max: self.config.max_input_bytes,
            });
        }
        Ok(())
    }

    fn options(&self, mode: SanitizeMode) -> SanitizeOptions<'_> {
        SanitizeOptions::new(mode).with_palette(&self.config.palette)
    }

    /// Sanitize with the configured mode.
    pub fn sanitize(&self, html: &str) -> Result<String, RichTextError> {
        self.sanitize_as(html, self.config.mode)
    }

    /// Sanitize with an explicit mode.
    pub fn sanitize_as(&self, html: &str, mode: SanitizeMode) -> Result<String, RichTextError> {
        self.check_size(html)?;
        Ok(sanitize_html(html, &self.options(mode)))
    }

    /// Normalize a clipboard payload; both flavors count toward the cap.
    pub fn normalize_paste(&self, input: &PasteInput) -> Result<String, RichTextError> {
        if let Some(html) = &input.html {
            self.check_size(html)?;
        }
        if let Some(text) = &input.text {
            self.check_size(text)?;
        }
        Ok(normalize_pasted_html_with(input, &self.options(input.mode)))
    }

    pub fn plain_text(&self, html: &str) -> Result<String, RichTextError> {
        self.check_size(html)?;
        Ok(html_to_plain_text(html))
    }

    /// Render with the configured linkify/mentionify switches.
    pub fn render(&self, html: &str) -> Result<String, RichTextError> {
        let options = RenderOptions {
            linkify: self.config.linkify,
            mentionify: self.config.mentionify,
            mode: self.config.mode,
        };
        self.render_with(html, &options)
    }

    pub fn render_with(&self, html: &str, options: &RenderOptions) -> Result<String, RichTextError> {
        self.check_size(html)?;
        Ok(render_safe_html_with(html, options, &self.options(options.mode)))
    }
}
