//! nbscrub - CLI entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::clean::Mode;
use nbscrub::cli::{Cli, Commands, ConfigCommands};

/// Log level for the given verbosity flags.
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Clean {
            file,
            output,
            dry_run,
            check,
            backup,
        } => commands::clean::handle(
            config,
            &file,
            output.as_deref(),
            Mode::from_flags(dry_run, check, backup),
        ),
        Commands::Restore { file } => commands::restore::handle(&file).map(|_| ExitCode::SUCCESS),
        Commands::Rules => commands::config::handle_rules(config).map(|_| ExitCode::SUCCESS),
        Commands::Config(cmd) => {
            match cmd {
                ConfigCommands::Show => commands::config::handle_show(config)?,
                ConfigCommands::Init => commands::config::handle_init(config)?,
                ConfigCommands::Path => commands::config::handle_path(config)?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            commands::completions::handle::<Cli>(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}
