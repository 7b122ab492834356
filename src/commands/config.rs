//! Config and rules command handlers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use nbscrub::{Config, Rules};

#[derive(Serialize)]
struct RulesView<'a> {
    rules: &'a Rules,
}

/// Render the rule set under a `[rules]` table.
pub fn render_rules(rules: &Rules) -> Result<String> {
    toml::to_string_pretty(&RulesView { rules }).context("Failed to serialize rules")
}

/// The file `config init` writes to.
pub fn init_target(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Handle the rules command.
#[cfg(not(tarpaulin_include))]
pub fn handle_rules(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    print!("{}", render_rules(&config.rules)?);
    Ok(())
}

/// Handle config show command.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Handle config init command.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>) -> Result<()> {
    let path = init_target(config_path)?;
    Config::default().save_new(&path)?;
    println!("Wrote default configuration to: {}", path.display());
    Ok(())
}

/// Handle config path command.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = init_target(config_path)?;
    let status = if path.exists() {
        ""
    } else {
        " (not created, using defaults)"
    };
    println!("{}{}", path.display(), status);
    Ok(())
}
