//! CLI definitions for nbscrub
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for a consistent CLI appearance.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "nbscrub")]
#[command(about = "Strip outputs, drop exploratory cells and truncate Jupyter notebooks")]
#[command(
    long_about = "nbscrub - produce a clean, reproducible version of a Jupyter notebook.

A clean run does three things, in this order:
    1. clears outputs and execution counts of every code cell
    2. drops cells whose source matches a deny-list pattern, unless the
       cell contains a canonical marker
    3. cuts the notebook after the last cell containing the terminal marker

QUICK START:
    nbscrub clean GLFT.ipynb               Clean a notebook in place
    nbscrub clean GLFT.ipynb --dry-run     Show what would change
    nbscrub rules                          Show the active rules
    nbscrub config init                    Write a config file to customize

Rules are read from ~/.config/nbscrub/config.toml or --config."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of ~/.config/nbscrub/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a notebook
    #[command(long_about = "Clean a notebook: clear outputs, apply the deny-list, truncate.

The notebook is rewritten in place unless --output is given. Writes are
atomic: the result goes to a temporary file that replaces the target only
once it is complete. A notebook that fails to parse is never rewritten.

EXAMPLES:
    nbscrub clean GLFT.ipynb                      Clean in place
    nbscrub clean GLFT.ipynb -o GLFT.clean.ipynb  Write to another file
    nbscrub clean GLFT.ipynb --backup             Keep GLFT.ipynb.bak
    nbscrub clean GLFT.ipynb --dry-run            Report only
    nbscrub clean GLFT.ipynb --check              Exit 1 if not clean (CI)")]
    Clean {
        /// Notebook to clean
        #[arg(help = "Path to the .ipynb notebook")]
        file: PathBuf,
        /// Write the result here instead of modifying FILE
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Report what would change without writing anything
        #[arg(long, conflicts_with = "check")]
        dry_run: bool,
        /// Write nothing; exit with status 1 if the notebook would change
        #[arg(long)]
        check: bool,
        /// Copy FILE to FILE.bak before modifying it in place
        #[arg(long, conflicts_with = "output")]
        backup: bool,
    },

    /// Restore a notebook from its .bak backup
    #[command(long_about = "Restore a notebook from the backup written by 'clean --backup'.

The backup is removed after a successful restore.

EXAMPLE:
    nbscrub restore GLFT.ipynb")]
    Restore {
        /// Notebook to restore
        #[arg(help = "Path to the .ipynb notebook (not the .bak file)")]
        file: PathBuf,
    },

    /// Show the active filter rules
    #[command(long_about = "Print the deny-list patterns, canonical markers and terminal
marker that 'clean' would use, as TOML.

EXAMPLES:
    nbscrub rules
    nbscrub rules --config project.toml")]
    Rules,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the nbscrub configuration file.

Configuration is stored in ~/.config/nbscrub/config.toml. Every key is
optional; missing keys use the built-in defaults.

EXAMPLES:
    nbscrub config show      Display the effective configuration
    nbscrub config init      Write the defaults to the config file
    nbscrub config path      Print the config file location"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Write the default configuration to the config file
    #[command(long_about = "Write the default configuration to the config file.

Refuses to overwrite an existing file. With --config, writes there instead
of ~/.config/nbscrub/config.toml.")]
    Init,
    /// Print the config file path
    Path,
}
