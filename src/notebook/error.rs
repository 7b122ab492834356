//! Notebook I/O errors.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a notebook.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("Failed to read notebook {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed notebook: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write notebook {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
