//! Configuration management for nbscrub
//!
//! Configuration lives in `~/.config/nbscrub/config.toml` unless a path is
//! given explicitly. Every key is optional; missing keys take the built-in
//! defaults.
//!
//! ```toml
//! [rules]
//! deny_patterns = ["bid_close", '\bsignal_strength\b']
//! canonical_markers = ["run_glft_paper", "glft_asymptotic_deltas"]
//! terminal_marker = "run_glft_paper("
//!
//! [output]
//! indent = 1
//! trailing_newline = true
//! ```

mod io;
mod types;

pub use io::ConfigError;
pub use types::*;

use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/nbscrub/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/nbscrub)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        io::config_dir()
    }

    /// Load from an explicit path, the user config file, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        io::load(explicit)
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        io::load_from(path)
    }

    /// Parse from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        io::parse(contents)
    }

    /// Write to a new file; fails if the file exists
    pub fn save_new(&self, path: &Path) -> Result<(), ConfigError> {
        io::save_new(self, path)
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
