//! Core configuration type for the rich-text engine
//!
//! `RichTextConfig` carries the per-deployment knobs: default sanitize mode,
//! the input-size cap, the color palette, and render switches. It is
//! (de)serialized in camelCase so the same JSON can be shared with the
//! browser-side editor.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RichTextError;
use crate::richtext::{Palette, SanitizeMode};
use crate::utils::MAX_HTML_SIZE;

/// Main configuration struct for rich-text processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichTextConfig {
    /// Mode used when a call does not name one.
    pub(crate) mode: SanitizeMode,

    /// Inputs longer than this many bytes are rejected before parsing.
    ///
    /// Default: 10 MB
    pub(crate) max_input_bytes: usize,

    /// Text and highlight palettes (`textColors` / `hilites` on the wire).
    #[serde(flatten)]
    pub(crate) palette: Palette,

    /// Turn bare URLs into links when rendering.
    ///
    /// Default: true
    pub(crate) linkify: bool,

    /// Wrap `@name` tokens in mention spans when rendering.
    ///
    /// Default: false
    pub(crate) mentionify: bool,
}

impl Default for RichTextConfig {
    fn default() -> Self {
        Self {
            mode: SanitizeMode::Comment,
            max_input_bytes: MAX_HTML_SIZE,
            palette: Palette::default(),
            linkify: true,
            mentionify: false,
        }
    }
}

impl RichTextConfig {
    /// Check the palette and the input cap.
    pub fn validate(&self) -> Result<(), RichTextError> {
        if self.max_input_bytes == 0 {
            return Err(RichTextError::Config(
                "maxInputBytes must be greater than zero".to_string(),
            ));
        }
        self.palette.validate()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse rich-text config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("Invalid config in {}", path.display()))
    }
}
