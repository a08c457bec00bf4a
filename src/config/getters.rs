//! Getter methods for `RichTextConfig`

use super::types::RichTextConfig;
use crate::richtext::{Palette, SanitizeMode};

impl RichTextConfig {
    #[must_use]
    pub fn mode(&self) -> SanitizeMode {
        self.mode
    }

    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn linkify(&self) -> bool {
        self.linkify
    }

    #[must_use]
    pub fn mentionify(&self) -> bool {
        self.mentionify
    }
}
