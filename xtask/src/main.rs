//! xtask - Build tasks for nbscrub
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages and COMMANDS.md from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use nbscrub::cli::Cli;
use nbscrub::Rules;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for nbscrub")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only generate man pages
        #[arg(long, conflicts_with = "markdown")]
        man: bool,

        /// Only generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            if !markdown {
                generate_man_pages(&output)?;
            }
            if !man {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate nbscrub.1 plus one page per (nested) subcommand
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(cmd.clone(), &man_dir.join("nbscrub.1"))?;

    for sub in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = sub.get_name();
        render_man(sub.clone(), &man_dir.join(format!("nbscrub-{}.1", name)))?;

        for nested in sub.get_subcommands().filter(|c| !c.is_hide_set()) {
            let file = format!("nbscrub-{}-{}.1", name, nested.get_name());
            render_man(nested.clone(), &man_dir.join(file))?;
        }
    }

    Ok(())
}

fn flag_of(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (short, long) {
        (Some(s), Some(l)) => Some(format!("{}, {}", s, l)),
        (None, Some(l)) => Some(l),
        (Some(s), None) => Some(s),
        (None, None) => None,
    }
}

fn push_args(markdown: &mut String, cmd: &Command) {
    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_str();
        if id == "help" || id == "version" {
            continue;
        }
        let label = if arg.is_positional() {
            format!("<{}>", id.to_uppercase())
        } else {
            match flag_of(arg) {
                Some(flag) => flag,
                None => continue,
            }
        };
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        markdown.push_str(&format!("- `{}`: {}\n", label, help));
    }
    markdown.push('\n');
}

/// Generate COMMANDS.md, including the built-in rule set
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::from("# nbscrub Command Reference\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    for sub in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = sub.get_name();
        markdown.push_str(&format!("## nbscrub {}\n\n", name));
        if let Some(about) = sub.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        push_args(&mut markdown, sub);

        for nested in sub.get_subcommands().filter(|c| !c.is_hide_set()) {
            markdown.push_str(&format!("### nbscrub {} {}\n\n", name, nested.get_name()));
            if let Some(about) = nested.get_about() {
                markdown.push_str(&format!("{}\n\n", about));
            }
        }
    }

    let rules = Rules::default();
    markdown.push_str("## Built-in rules\n\n");
    markdown.push_str(&format!(
        "Terminal marker: `{}`\n\nCanonical markers:\n\n",
        rules.terminal_marker
    ));
    for marker in &rules.canonical_markers {
        markdown.push_str(&format!("- `{}`\n", marker));
    }
    markdown.push_str("\nDeny patterns:\n\n");
    for pattern in &rules.deny_patterns {
        markdown.push_str(&format!("- `{}`\n", pattern));
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}
