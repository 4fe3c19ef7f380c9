//! Configuration management for comment-thread

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation limits
    pub limits: LimitConfig,
    /// Interactive demo settings
    pub demo: DemoConfig,
}

/// Validation limits for reply content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum reply text length
    pub max_text_length: usize,
    /// Maximum author name length
    pub max_author_length: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_text_length: 2000,
            max_author_length: 100,
        }
    }
}

/// Interactive demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Author name attached to replies composed in the demo
    pub author: String,
    /// Indent width per nesting level when rendering
    pub indent_width: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            author: "You".to_string(),
            indent_width: 2,
        }
    }
}
