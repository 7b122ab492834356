//! Filter rules: deny-list patterns, canonical markers and the terminal marker.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Patterns for exploratory cells that should not survive cleanup.
pub const DEFAULT_DENY_PATTERNS: &[&str] = &[
    r"add_variance_ratio",
    r"add_variance_ratio_robust",
    r"\brun_vrt_maker_corrected\b",
    r"\bVRT_THRESHOLD\b",
    r"\bsignal_strength\b",
    r"min_trade_price",
    r"max_trade_price",
    r"bid_close",
    r"ask_close",
];

/// Substrings marking the paper implementation cells.
pub const DEFAULT_CANONICAL_MARKERS: &[&str] = &["run_glft_paper", "glft_asymptotic_deltas"];

/// The call whose last occurrence ends the notebook.
pub const DEFAULT_TERMINAL_MARKER: &str = "run_glft_paper(";

/// Errors raised while compiling rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid deny pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Deny pattern #{index} is empty and would drop every cell")]
    EmptyPattern { index: usize },

    #[error("Canonical marker #{index} is empty and would keep every cell")]
    EmptyCanonicalMarker { index: usize },
}

/// Uncompiled rule set, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Regular expressions; a search hit on any one drops the cell.
    #[serde(default = "default_deny_patterns")]
    pub deny_patterns: Vec<String>,
    /// Substrings that keep a cell regardless of the deny-list.
    #[serde(default = "default_canonical_markers")]
    pub canonical_markers: Vec<String>,
    /// Substring whose last occurrence defines the cutoff.
    #[serde(default = "default_terminal_marker")]
    pub terminal_marker: String,
}

pub fn default_deny_patterns() -> Vec<String> {
    DEFAULT_DENY_PATTERNS.iter().map(|p| p.to_string()).collect()
}

pub fn default_canonical_markers() -> Vec<String> {
    DEFAULT_CANONICAL_MARKERS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

pub fn default_terminal_marker() -> String {
    DEFAULT_TERMINAL_MARKER.to_string()
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            deny_patterns: default_deny_patterns(),
            canonical_markers: default_canonical_markers(),
            terminal_marker: default_terminal_marker(),
        }
    }
}

impl Rules {
    /// Build a rule set from string slices.
    pub fn new(deny_patterns: &[&str], canonical_markers: &[&str], terminal_marker: &str) -> Self {
        Self {
            deny_patterns: deny_patterns.iter().map(|p| p.to_string()).collect(),
            canonical_markers: canonical_markers.iter().map(|m| m.to_string()).collect(),
            terminal_marker: terminal_marker.to_string(),
        }
    }

    /// Compile every deny pattern, failing on the first invalid one.
    pub fn compile_patterns(&self) -> Result<Vec<Regex>, RuleError> {
        self.deny_patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                if pattern.is_empty() {
                    return Err(RuleError::EmptyPattern { index });
                }
                Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Check that no canonical marker is empty.
    pub fn validate_markers(&self) -> Result<(), RuleError> {
        match self.canonical_markers.iter().position(String::is_empty) {
            Some(index) => Err(RuleError::EmptyCanonicalMarker { index }),
            None => Ok(()),
        }
    }
}
