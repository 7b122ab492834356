//! Notebook reader
//!
//! Parses a notebook from a file, a string or any reader. The whole document
//! is parsed before anything else happens, so a malformed file never reaches
//! the writer.

use std::fs;
use std::io::Read;
use std::path::Path;

use super::{Notebook, NotebookError};

impl Notebook {
    /// Parse a notebook from a file path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let notebook = Self::parse_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            cells = notebook.cells.len(),
            "parsed notebook"
        );
        Ok(notebook)
    }

    /// Parse a notebook from a string.
    pub fn parse_str(contents: &str) -> Result<Self, NotebookError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a notebook from any reader.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self, NotebookError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
