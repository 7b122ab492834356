//! Jupyter notebook parser and writer
//!
//! This module reads `.ipynb` documents into typed cells and writes them
//! back. Only the shape the cell filter needs is validated: a top-level
//! object whose optional `cells` key is an array of cell objects. All other
//! fields round-trip untouched.
//!
//! # Structure
//!
//! - `types` - `Notebook`, `Cell`, `CellKind` and `Source`
//! - `reader` - Parsing notebooks from files, strings and readers
//! - `writer` - Pretty-printed, atomic writes

mod error;
mod reader;
mod types;
mod writer;

pub use error::NotebookError;
pub use types::{Cell, CellKind, Notebook, Source};
pub use writer::WriteOptions;
