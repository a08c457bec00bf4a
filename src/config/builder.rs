//! Fluent builder for `RichTextConfig`
//!
//! Every field has a default, so `RichTextConfig::builder().build()` yields
//! the stock configuration. `build()` validates the palette and the input
//! cap before handing the config out.

use anyhow::{Context, Result};

use super::types::RichTextConfig;
use crate::richtext::SanitizeMode;

#[derive(Debug, Clone, Default)]
pub struct RichTextConfigBuilder {
    config: RichTextConfig,
}

impl RichTextConfig {
    #[must_use]
    pub fn builder() -> RichTextConfigBuilder {
        RichTextConfigBuilder::default()
    }
}

impl RichTextConfigBuilder {
    #[must_use]
    pub fn mode(mut self, mode: SanitizeMode) -> Self {
        self.config.mode = mode;
        self
    }

    #[must_use]
    pub fn max_input_bytes(mut self, max: usize) -> Self {
        self.config.max_input_bytes = max;
        self
    }

    #[must_use]
    pub fn text_colors(mut self, colors: Vec<String>) -> Self {
        self.config.palette.text_colors = colors;
        self
    }

    #[must_use]
    pub fn hilites(mut self, colors: Vec<String>) -> Self {
        self.config.palette.hilites = colors;
        self
    }

    #[must_use]
    pub fn linkify(mut self, enabled: bool) -> Self {
        self.config.linkify = enabled;
        self
    }

    #[must_use]
    pub fn mentionify(mut self, enabled: bool) -> Self {
        self.config.mentionify = enabled;
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<RichTextConfig> {
        self.config
            .validate()
            .context("Invalid rich-text configuration")?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = RichTextConfig::builder().build()?;
        assert_eq!(config, RichTextConfig::default());
        Ok(())
    }

    #[test]
    fn test_setters() -> Result<()> {
        let config = RichTextConfig::builder()
            .mode(SanitizeMode::Article)
            .max_input_bytes(1024)
            .hilites(vec!["rgba(0,0,0,0)".into(), "#ffff00".into()])
            .linkify(false)
            .mentionify(true)
            .build()?;
        assert_eq!(config.mode(), SanitizeMode::Article);
        assert_eq!(config.max_input_bytes(), 1024);
        assert_eq!(config.palette().hilites.len(), 2);
        assert!(!config.linkify());
        assert!(config.mentionify());
        Ok(())
    }

    #[test]
    fn test_build_rejects_bad_palette() {
        let err = RichTextConfig::builder()
            .text_colors(vec![])
            .build()
            .expect_err("empty palette");
        assert!(format!("{err:#}").contains("textColors"));
    }
}
