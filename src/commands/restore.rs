//! Restore command handler

use std::path::Path;

use anyhow::{bail, Result};

use nbscrub::files::backup;

/// Handle the restore command.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<()> {
    if !backup::has_backup(file) {
        bail!(
            "No backup exists for: {}\nHint: backups are only written by 'nbscrub clean --backup'.",
            file.display()
        );
    }

    backup::restore(file)?;
    tracing::info!(path = %file.display(), "restored from backup");
    println!("Restored {} from backup", file.display());
    Ok(())
}
