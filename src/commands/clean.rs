//! Clean command handler.
//!
//! Runs the cell filter over a notebook and writes the result in place, to
//! another file, or nowhere (`--dry-run`, `--check`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use nbscrub::files::backup;
use nbscrub::notebook::WriteOptions;
use nbscrub::{CellFilter, Config, FilterReport, Notebook};

/// What to do with the cleaned notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write { backup: bool },
    DryRun,
    Check,
}

impl Mode {
    pub fn from_flags(dry_run: bool, check: bool, backup: bool) -> Self {
        if check {
            Mode::Check
        } else if dry_run {
            Mode::DryRun
        } else {
            Mode::Write { backup }
        }
    }
}

/// Result of cleaning one file.
#[derive(Debug)]
pub struct CleanOutcome {
    pub report: FilterReport,
    /// The cleaned notebook differs from the input.
    pub changed: bool,
    /// Where the notebook was written, if anywhere.
    pub written: Option<PathBuf>,
    /// The notebook was snapshotted to `.bak` before writing.
    pub backed_up: bool,
    /// That snapshot replaced an older one.
    pub backup_replaced: bool,
}

/// Clean `file`, writing to `output` or back to `file` depending on `mode`.
pub fn clean_file(
    filter: &CellFilter,
    write_options: WriteOptions,
    file: &Path,
    output: Option<&Path>,
    mode: Mode,
) -> Result<CleanOutcome> {
    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    if file.extension().and_then(|e| e.to_str()) != Some("ipynb") {
        tracing::warn!(path = %file.display(), "file does not have .ipynb extension");
    }

    let notebook = Notebook::parse(file)
        .with_context(|| format!("Failed to parse notebook: {}", file.display()))?;
    let (cleaned, report) = filter.clean(&notebook);
    let changed = cleaned != notebook;

    let mut outcome = CleanOutcome {
        report,
        changed,
        written: None,
        backed_up: false,
        backup_replaced: false,
    };

    let Mode::Write { backup: make_backup } = mode else {
        return Ok(outcome);
    };

    let target = match output {
        Some(path) => path,
        None if !changed => {
            tracing::info!(path = %file.display(), "notebook already clean");
            return Ok(outcome);
        }
        None => file,
    };

    if make_backup && output.is_none() {
        outcome.backup_replaced = backup::snapshot(file)?;
        outcome.backed_up = true;
    }

    cleaned
        .write(target, write_options)
        .with_context(|| format!("Failed to write output file: {}", target.display()))?;
    outcome.written = Some(target.to_path_buf());
    Ok(outcome)
}

/// Handle the clean command.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config_path: Option<&Path>,
    file: &Path,
    output: Option<&Path>,
    mode: Mode,
) -> Result<ExitCode> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let filter = CellFilter::new(&config.rules).context("Invalid filter rules")?;

    let outcome = clean_file(
        &filter,
        config.output.write_options(),
        file,
        output,
        mode,
    )?;

    println!("{}", outcome.report.summary());
    println!();

    match mode {
        Mode::Check => {
            if outcome.changed {
                println!("{} would be modified", file.display());
                return Ok(ExitCode::FAILURE);
            }
            println!("{} is clean", file.display());
        }
        Mode::DryRun => {
            if outcome.changed {
                println!("Dry run: {} would be modified (nothing written)", file.display());
            } else {
                println!("Dry run: {} is already clean", file.display());
            }
        }
        Mode::Write { .. } => {
            if outcome.backed_up {
                let replaced = if outcome.backup_replaced {
                    " (replaced previous backup)"
                } else {
                    ""
                };
                println!(
                    "Backup written to: {}{}",
                    backup::backup_path_for(file).display(),
                    replaced
                );
            }
            match (&outcome.written, output) {
                (Some(path), Some(_)) => println!("Output written to: {}", path.display()),
                (Some(_), None) => println!("Notebook modified in-place"),
                (None, _) => println!("No changes needed (notebook already clean)"),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
