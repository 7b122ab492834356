//! Command handlers for the nbscrub CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clean;
pub mod completions;
pub mod config;
pub mod restore;
