//! Pre-clean notebook snapshots.
//!
//! `clean --backup` saves the notebook bytes to `<file>.bak` right before an
//! in-place write, and `restore` puts them back. Each snapshot replaces the
//! previous one, so the backup is always the notebook as it was before the
//! most recent clean, edits included.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::atomic;
use crate::notebook::Notebook;

/// `<notebook>.bak`, next to the notebook.
pub fn backup_path_for(notebook: &Path) -> PathBuf {
    let mut backup = notebook.as_os_str().to_owned();
    backup.push(".bak");
    PathBuf::from(backup)
}

pub fn has_backup(notebook: &Path) -> bool {
    backup_path_for(notebook).exists()
}

/// Snapshot the notebook as it is on disk now.
///
/// Returns `Ok(true)` when an older snapshot was replaced.
pub fn snapshot(notebook: &Path) -> Result<bool> {
    let backup = backup_path_for(notebook);
    let replaced = backup.exists();

    let bytes = fs::read(notebook)
        .with_context(|| format!("Failed to read notebook: {}", notebook.display()))?;
    atomic::replace(&backup, &bytes, notebook)
        .with_context(|| format!("Failed to write backup: {}", backup.display()))?;

    if replaced {
        tracing::info!(backup = %backup.display(), "replaced previous backup");
    } else {
        tracing::debug!(backup = %backup.display(), "created backup");
    }
    Ok(replaced)
}

/// Put the snapshot back in place of the notebook and delete it.
///
/// A snapshot that no longer parses as a notebook is left where it is and
/// the notebook is not touched.
pub fn restore(notebook: &Path) -> Result<()> {
    let backup = backup_path_for(notebook);
    if !backup.exists() {
        bail!("No backup exists for: {}", notebook.display());
    }

    let contents = fs::read_to_string(&backup)
        .with_context(|| format!("Failed to read backup: {}", backup.display()))?;
    Notebook::parse_str(&contents)
        .with_context(|| format!("Backup is not a valid notebook: {}", backup.display()))?;

    atomic::replace(notebook, contents.as_bytes(), notebook)
        .with_context(|| format!("Failed to restore from backup: {}", notebook.display()))?;
    fs::remove_file(&backup)
        .with_context(|| format!("Failed to remove backup: {}", backup.display()))?;
    Ok(())
}
