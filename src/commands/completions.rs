//! Completions command handler

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

/// Write completions for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
