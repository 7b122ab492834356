//! File helpers: atomic replacement and pre-clean backups.

pub mod atomic;
pub mod backup;
