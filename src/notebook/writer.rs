//! Notebook writer
//!
//! Serializes notebooks as pretty-printed JSON. Non-ASCII text is written
//! literally. Writes to a path go through a temporary file in the target
//! directory that is renamed over the destination, so readers never see a
//! half-written notebook. An existing file keeps its permissions.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{Notebook, NotebookError};
use crate::files::atomic;

/// Formatting applied when a notebook is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Append `\n` after the closing brace.
    pub trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 1,
            trailing_newline: true,
        }
    }
}

impl Notebook {
    /// Serialize the notebook to a writer.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        options: WriteOptions,
    ) -> Result<(), NotebookError> {
        let indent = vec![b' '; options.indent];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        self.serialize(&mut serializer)
            .map_err(NotebookError::Serialize)?;
        if options.trailing_newline {
            writer
                .write_all(b"\n")
                .map_err(|e| NotebookError::Serialize(serde_json::Error::io(e)))?;
        }
        Ok(())
    }

    /// Serialize the notebook to a string.
    pub fn to_json_string(&self, options: WriteOptions) -> Result<String, NotebookError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, options)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write the notebook to a path, replacing it atomically.
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        options: WriteOptions,
    ) -> Result<(), NotebookError> {
        let path = path.as_ref();
        let write_err = |source: std::io::Error| NotebookError::Write {
            path: path.to_path_buf(),
            source,
        };

        let contents = self.to_json_string(options)?;
        atomic::replace(path, contents.as_bytes(), path).map_err(write_err)?;

        tracing::debug!(
            path = %path.display(),
            cells = self.cells.len(),
            bytes = contents.len(),
            "wrote notebook"
        );
        Ok(())
    }
}
