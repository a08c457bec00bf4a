//! Configuration module for the rich-text engine
//!
//! This module provides the `RichTextConfig` struct and its builder for
//! configuring sanitization, paste normalization and rendering.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::RichTextConfigBuilder;
pub use types::RichTextConfig;
