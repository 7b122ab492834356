//! nbscrub library
//!
//! Cleans Jupyter notebooks for reproducible commits: clears execution
//! outputs, drops exploratory cells matched by a deny-list, keeps canonical
//! cells no matter what, and truncates the notebook after the last
//! terminal call.

pub mod cli;
pub mod config;
pub mod files;
pub mod filter;
pub mod notebook;

pub use config::Config;
pub use filter::{CellFilter, FilterReport, Rules};
pub use notebook::{Cell, CellKind, Notebook, Source};
