//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::filter::Rules;
use crate::notebook::WriteOptions;

/// Largest indent accepted for output.
pub const MAX_INDENT: usize = 8;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How cleaned notebooks are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per JSON indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// End the file with a newline
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

pub fn default_indent() -> usize {
    1
}

pub fn default_trailing_newline() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            trailing_newline: default_trailing_newline(),
        }
    }
}

impl OutputConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: self.indent,
            trailing_newline: self.trailing_newline,
        }
    }
}
