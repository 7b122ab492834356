//! Atomic file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `target` with `contents` in one rename.
///
/// The bytes go to a temporary file in the target's directory, which is
/// synced and then persisted over `target`. If `mode_from` exists, its
/// permissions are copied onto the new file; otherwise the temporary file's
/// default mode is kept.
pub fn replace(target: &Path, contents: &[u8], mode_from: &Path) -> io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    if let Ok(meta) = fs::metadata(mode_from) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
